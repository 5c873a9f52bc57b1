//! File-backed key provisioning
//!
//! Key and IV live in two raw binary files of exactly 32 and 16 bytes.
//! A missing or truncated file means "no existing key"; bytes past the
//! expected length are ignored.
//!
//! Saving stages both files next to their targets and renames them into
//! place, so a failed save never leaves a new key paired with an old IV.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use lockbox_api::error::{Error, Result};
use lockbox_common::security::{SecretBuffer, SecretVec};
use lockbox_params::{AES256_KEY_SIZE, IV_SIZE};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::material::KeyMaterial;

/// Default key file name used by [`KeyStore::in_dir`]
pub const KEY_FILE_NAME: &str = "aes_key.bin";

/// Default IV file name used by [`KeyStore::in_dir`]
pub const IV_FILE_NAME: &str = "aes_iv.bin";

/// Paths of a persisted key/IV pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    key_path: PathBuf,
    iv_path: PathBuf,
}

impl KeyStore {
    /// Store using explicit file paths
    pub fn new(key_path: impl Into<PathBuf>, iv_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            iv_path: iv_path.into(),
        }
    }

    /// Store using the default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(KEY_FILE_NAME), dir.join(IV_FILE_NAME))
    }

    /// Path of the key file
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Path of the IV file
    pub fn iv_path(&self) -> &Path {
        &self.iv_path
    }

    /// Load the persisted pair
    ///
    /// Returns `Ok(None)` if either file is missing or shorter than
    /// expected. Other I/O failures are errors.
    pub fn load(&self) -> Result<Option<KeyMaterial>> {
        let key = match read_exact::<AES256_KEY_SIZE>(&self.key_path)? {
            Some(key) => key,
            None => return Ok(None),
        };
        let iv = match read_exact::<IV_SIZE>(&self.iv_path)? {
            Some(iv) => iv,
            None => return Ok(None),
        };
        Ok(Some(KeyMaterial::from_slices(key.as_slice(), iv.as_slice())?))
    }

    /// Write the pair, replacing any existing files
    ///
    /// Both files are written and synced before either target is replaced.
    /// If the IV cannot be moved into place the previous key file is put
    /// back. On Unix the files are created with mode 0600.
    pub fn save(&self, material: &KeyMaterial) -> Result<()> {
        let key = stage(&self.key_path, material.key().as_slice())?;
        let iv = stage(&self.iv_path, material.iv().as_slice())?;
        let previous_key = read_previous(&self.key_path)?;

        key.persist(&self.key_path)
            .map_err(|e| store_error("replace", e.error))?;
        if let Err(e) = iv.persist(&self.iv_path) {
            self.restore_key(previous_key);
            return Err(store_error("replace", e.error));
        }
        Ok(())
    }

    fn restore_key(&self, previous: Option<SecretVec>) {
        let restored = match previous {
            Some(bytes) => stage(&self.key_path, bytes.as_slice()).and_then(|file| {
                file.persist(&self.key_path)
                    .map(drop)
                    .map_err(|e| store_error("replace", e.error))
            }),
            None => remove_if_present(&self.key_path),
        };
        if let Err(e) = restored {
            warn!(
                key_path = %self.key_path.display(),
                error = %e,
                "could not restore previous key file"
            );
        }
    }

    /// Load the persisted pair, or generate and save a new one
    pub fn load_or_generate(&self) -> Result<KeyMaterial> {
        if let Some(material) = self.load()? {
            info!(key_path = %self.key_path.display(), "loaded existing key and IV");
            return Ok(material);
        }

        let material = KeyMaterial::generate()?;
        self.save(&material)?;
        info!(key_path = %self.key_path.display(), "generated new key and IV");
        Ok(material)
    }

    /// Remove both files; files that are already gone are not an error
    pub fn clear(&self) -> Result<()> {
        remove_if_present(&self.key_path)?;
        remove_if_present(&self.iv_path)?;
        info!(key_path = %self.key_path.display(), "removed key and IV files");
        Ok(())
    }
}

fn read_exact<const N: usize>(path: &Path) -> Result<Option<SecretBuffer<N>>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(store_error("open", e)),
    };

    let mut buf = SecretBuffer::<N>::zeroed();
    match file.read_exact(buf.as_mut_slice()) {
        Ok(()) => Ok(Some(buf)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            warn!(
                path = %path.display(),
                expected = N,
                "key file is truncated; treating as absent"
            );
            Ok(None)
        }
        Err(e) => Err(store_error("read", e)),
    }
}

/// Write `bytes` to a synced temporary file in the target's directory
///
/// `tempfile` creates the file with mode 0600 on Unix. Dropping the
/// returned handle without persisting it deletes the file.
fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| store_error("create directory", e))?;

    let mut file = tempfile::Builder::new()
        .prefix(".lockbox-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(|e| store_error("create", e))?;
    file.write_all(bytes).map_err(|e| store_error("write", e))?;
    file.as_file().sync_all().map_err(|e| store_error("sync", e))?;
    Ok(file)
}

fn read_previous(path: &Path) -> Result<Option<SecretVec>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(SecretVec::new(bytes))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(store_error("read", e)),
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(store_error("remove", e)),
    }
}

fn store_error(context: &'static str, e: io::Error) -> Error {
    Error::KeyStore {
        context,
        message: e.to_string(),
    }
}
