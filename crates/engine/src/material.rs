//! Key and IV pairs
//!
//! [`KeyMaterial`] is the only type that owns raw key bytes outside the
//! expanded schedule. It is zeroized on drop, compares in constant time and
//! never prints its contents.

use core::fmt;

use lockbox_algorithms::kdf;
use lockbox_api::error::{validate, Result};
use lockbox_common::security::SecretBuffer;
use lockbox_params::{AES256_KEY_SIZE, DERIVED_MATERIAL_SIZE, IV_SIZE};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::random;

/// A 32-byte AES-256 key and a 16-byte IV
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: SecretBuffer<AES256_KEY_SIZE>,
    iv: SecretBuffer<IV_SIZE>,
}

impl KeyMaterial {
    /// Wrap a key and IV
    pub fn new(key: [u8; AES256_KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self {
            key: SecretBuffer::new(key),
            iv: SecretBuffer::new(iv),
        }
    }

    /// Copy a key and IV from slices
    ///
    /// Fails with `InvalidKeyMaterial` unless the key is 32 bytes and the IV 16.
    pub fn from_slices(key: &[u8], iv: &[u8]) -> Result<Self> {
        validate::key_material("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        validate::key_material("CBC initialization vector", iv.len(), IV_SIZE)?;

        let mut material = Self::zeroed();
        material.key.as_mut_slice().copy_from_slice(key);
        material.iv.as_mut_slice().copy_from_slice(iv);
        Ok(material)
    }

    /// Fresh key and IV from the operating system CSPRNG
    pub fn generate() -> Result<Self> {
        let mut material = Self::zeroed();
        random::fill(material.key.as_mut_slice(), "key generation")?;
        random::fill(material.iv.as_mut_slice(), "IV generation")?;
        Ok(material)
    }

    /// Fresh key and IV from a caller-supplied CSPRNG
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut material = Self::zeroed();
        rng.fill_bytes(material.key.as_mut_slice());
        rng.fill_bytes(material.iv.as_mut_slice());
        material
    }

    /// Derive key and IV from a password
    ///
    /// Runs the legacy derivation for 48 bytes and splits them into a
    /// 32-byte key followed by a 16-byte IV. The salt must be 16 bytes.
    pub fn derive(password: &[u8], salt: &[u8], iterations: u32) -> Result<Self> {
        debug!(iterations, output_len = DERIVED_MATERIAL_SIZE, "deriving key material");

        let derived = kdf::derive_key(password, salt, iterations, DERIVED_MATERIAL_SIZE)?;
        let (key, iv) = derived.as_slice().split_at(AES256_KEY_SIZE);
        Self::from_slices(key, iv)
    }

    /// The key
    pub fn key(&self) -> &SecretBuffer<AES256_KEY_SIZE> {
        &self.key
    }

    /// The IV
    pub fn iv(&self) -> &SecretBuffer<IV_SIZE> {
        &self.iv
    }

    /// Overwrite key and IV with zeros
    pub fn clear(&mut self) {
        self.zeroize();
    }

    fn zeroed() -> Self {
        Self {
            key: SecretBuffer::zeroed(),
            iv: SecretBuffer::zeroed(),
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial([REDACTED])")
    }
}
