//! Error collapsing for the engine facade
//!
//! Operations on untrusted ciphertext report a single failure kind to the
//! caller. The underlying kind is logged at debug level only.

use lockbox_api::error::{Error, Result};
use tracing::debug;

/// Extension trait that collapses any error into an engine-level failure
pub trait EngineResultExt<T> {
    /// Replace any error with [`Error::DecryptionFailed`]
    fn or_decryption_failed(self, context: &'static str) -> Result<T>;

    /// Replace any error with [`Error::EncryptionFailed`]
    fn or_encryption_failed(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> EngineResultExt<T> for core::result::Result<T, E> {
    fn or_decryption_failed(self, context: &'static str) -> Result<T> {
        self.map_err(|e| {
            let cause = e.into();
            debug!(kind = cause.kind(), context, "decryption failed");
            Error::DecryptionFailed { context }
        })
    }

    fn or_encryption_failed(self, context: &'static str) -> Result<T> {
        self.map_err(|e| {
            let cause = e.into();
            debug!(kind = cause.kind(), context, "encryption failed");
            Error::EncryptionFailed { context }
        })
    }
}
