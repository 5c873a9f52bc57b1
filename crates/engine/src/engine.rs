//! The cipher engine
//!
//! `encrypt`: empty input passes through; otherwise PKCS#7 pad, CBC encrypt
//! with the configured AES-256 round structure and Base64 encode. Under
//! [`IvPolicy::PerMessage`] the random IV is the first 16 bytes of the
//! encoded data.
//!
//! `decrypt`: empty input passes through; otherwise Base64 decode, check the
//! length, CBC decrypt and unpad. Every failure on this path is reported as
//! [`Error::DecryptionFailed`].
//!
//! An engine owns its key material. Re-keying replaces the material and the
//! expanded schedule together, and `clear` zeroizes both.

use core::fmt;

use lockbox_algorithms::block::Block;
use lockbox_algorithms::{base64, Aes256, BlockCipher, Cbc, LegacyAes256};
use lockbox_api::error::{validate, Error, Result};
use lockbox_params::{AES_BLOCK_SIZE, IV_SIZE};
use tracing::{debug, info};
use zeroize::Zeroize;

use crate::config::{BlockTransform, EngineConfig, IvPolicy};
use crate::error::EngineResultExt;
use crate::material::KeyMaterial;
use crate::random;
use crate::store::KeyStore;

/// Key material together with its expanded schedule
struct Keyed {
    material: KeyMaterial,
    cipher: Transform,
}

/// The keyed block cipher selected by [`BlockTransform`]
enum Transform {
    Legacy(LegacyAes256),
    Fips197(Aes256),
}

impl Transform {
    fn new(transform: BlockTransform, key: &[u8]) -> Result<Self> {
        Ok(match transform {
            BlockTransform::Legacy => Self::Legacy(LegacyAes256::new(key)?),
            BlockTransform::Fips197 => Self::Fips197(Aes256::new(key)?),
        })
    }
}

impl BlockCipher for Transform {
    fn name() -> &'static str {
        "AES-256"
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            Self::Legacy(cipher) => cipher.encrypt_block(block),
            Self::Fips197(cipher) => cipher.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut Block) {
        match self {
            Self::Legacy(cipher) => cipher.decrypt_block(block),
            Self::Fips197(cipher) => cipher.decrypt_block(block),
        }
    }
}

impl Zeroize for Transform {
    fn zeroize(&mut self) {
        match self {
            Self::Legacy(cipher) => cipher.zeroize(),
            Self::Fips197(cipher) => cipher.zeroize(),
        }
    }
}

enum State {
    Uninitialized,
    Ready(Keyed),
}

/// Caller-owned AES-256-CBC engine
///
/// `encrypt` and `decrypt` take `&self`, so a ready engine can be shared
/// between threads behind an `Arc`. Re-keying needs `&mut self`.
pub struct Engine {
    config: EngineConfig,
    state: State,
}

impl Engine {
    /// Create an uninitialized engine
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: State::Uninitialized,
        }
    }

    /// Create an engine that is ready with `material`
    pub fn with_material(config: EngineConfig, material: KeyMaterial) -> Result<Self> {
        let mut engine = Self::new(config);
        engine.install(material)?;
        Ok(engine)
    }

    /// The configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether key material is installed
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Install key material, replacing any previous material
    pub fn install(&mut self, material: KeyMaterial) -> Result<()> {
        let transform = self.config.transform;
        let cipher = Transform::new(transform, material.key().as_slice())?;
        let rekey = self.is_ready();
        self.state = State::Ready(Keyed { material, cipher });
        info!(rekey, ?transform, "key material installed");
        Ok(())
    }

    /// Derive key material from `password` and a 16-byte `salt`
    ///
    /// Uses the configured iteration count.
    pub fn derive_from_password(&mut self, password: &str, salt: &[u8]) -> Result<()> {
        let material = KeyMaterial::derive(password.as_bytes(), salt, self.config.kdf_iterations)?;
        self.install(material)
    }

    /// Install freshly generated random key material
    pub fn generate(&mut self) -> Result<()> {
        self.install(KeyMaterial::generate()?)
    }

    /// Install the material persisted in `store`, generating and saving it if absent
    pub fn load_or_generate(&mut self, store: &KeyStore) -> Result<()> {
        self.install(store.load_or_generate()?)
    }

    /// The installed key material
    pub fn material(&self) -> Result<&KeyMaterial> {
        Ok(&self.keyed("material")?.material)
    }

    /// Zeroize the key material and schedule and return to uninitialized
    pub fn clear(&mut self) {
        if let State::Ready(keyed) = &mut self.state {
            keyed.material.zeroize();
            keyed.cipher.zeroize();
            info!("key material cleared");
        }
        self.state = State::Uninitialized;
    }

    /// Encrypt UTF-8 text to Base64
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.encrypt_bytes(plaintext.as_bytes())
    }

    /// Encrypt arbitrary bytes to Base64
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let keyed = self.keyed("encrypt")?;
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let sealed = match self.config.iv_policy {
            IvPolicy::PerMessage => {
                let iv: [u8; IV_SIZE] =
                    random::random_array("per-message IV").or_encryption_failed("encrypt")?;
                let mut out = iv.to_vec();
                out.extend(seal(&keyed.cipher, &iv, plaintext)?);
                out
            }
            IvPolicy::Fixed => seal(&keyed.cipher, keyed.material.iv().as_slice(), plaintext)?,
        };

        Ok(base64::encode(&sealed))
    }

    /// Decrypt Base64 produced by [`encrypt`](Self::encrypt) back to text
    ///
    /// Plaintext that is not valid UTF-8 is reported as a decryption failure.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let bytes = self.decrypt_bytes(ciphertext)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                e.into_bytes().zeroize();
                debug!(kind = "invalid_utf8", context = "decrypt", "decryption failed");
                Err(Error::DecryptionFailed { context: "decrypt" })
            }
        }
    }

    /// Decrypt Base64 back to bytes
    pub fn decrypt_bytes(&self, ciphertext: &str) -> Result<Vec<u8>> {
        let keyed = self.keyed("decrypt")?;
        if ciphertext.is_empty() {
            return Ok(Vec::new());
        }
        self.open(keyed, ciphertext).or_decryption_failed("decrypt")
    }

    fn open(&self, keyed: &Keyed, ciphertext: &str) -> Result<Vec<u8>> {
        let data = base64::decode(ciphertext)?;

        let (iv, body) = match self.config.iv_policy {
            IvPolicy::PerMessage => {
                let body_len = data.len().saturating_sub(IV_SIZE);
                validate::ciphertext_length("ciphertext", body_len, AES_BLOCK_SIZE)?;
                data.split_at(IV_SIZE)
            }
            IvPolicy::Fixed => (keyed.material.iv().as_slice(), data.as_slice()),
        };

        unseal(&keyed.cipher, iv, body)
    }

    fn keyed(&self, operation: &'static str) -> Result<&Keyed> {
        match &self.state {
            State::Ready(keyed) => Ok(keyed),
            State::Uninitialized => Err(Error::NotInitialized { operation }),
        }
    }
}

fn seal<B: BlockCipher>(cipher: &B, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cbc = Cbc::new(cipher, iv).or_encryption_failed("encrypt")?;
    cbc.encrypt_padded(plaintext).or_encryption_failed("encrypt")
}

fn unseal<B: BlockCipher>(cipher: &B, iv: &[u8], body: &[u8]) -> Result<Vec<u8>> {
    validate::ciphertext_length("ciphertext", body.len(), AES_BLOCK_SIZE)?;
    let cbc = Cbc::new(cipher, iv)?;
    Ok(cbc.decrypt_padded(body)?)
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .finish()
    }
}
