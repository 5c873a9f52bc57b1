//! Error type definitions for cipher engine operations

use thiserror::Error as ThisError;

/// Primary error type for cipher engine operations
///
/// Variants never carry key, IV, plaintext or ciphertext bytes. The
/// `context` field names the operation that detected the failure.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key or IV of the wrong length
    #[error("{context}: invalid key material length (expected {expected}, got {actual})")]
    InvalidKeyMaterial {
        /// Where the material was rejected
        context: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// PKCS#7 padding that does not verify
    #[error("{context}: invalid padding")]
    InvalidPadding {
        /// Where the padding was rejected
        context: &'static str,
    },

    /// Text that is not valid Base64
    #[error("{context}: invalid encoding: {message}")]
    InvalidEncoding {
        /// Where the text was rejected
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Ciphertext that is empty or not a whole number of blocks
    #[error("{context}: ciphertext length {actual} is not a positive multiple of {block_size}")]
    InvalidCiphertextLength {
        /// Where the ciphertext was rejected
        context: &'static str,
        /// Cipher block size in bytes
        block_size: usize,
        /// Supplied length in bytes
        actual: usize,
    },

    /// Operation attempted before key material was installed
    #[error("{operation}: engine is not initialized")]
    NotInitialized {
        /// The operation that was attempted
        operation: &'static str,
    },

    /// Invalid parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Parameter or operation name
        context: &'static str,
        /// Reason the parameter was rejected
        message: String,
    },

    /// Encryption could not complete
    #[error("Encryption failed: {context}")]
    EncryptionFailed {
        /// Where encryption failed
        context: &'static str,
    },

    /// Decryption could not complete
    ///
    /// The facade reports every decrypt-path failure with this variant so
    /// callers cannot distinguish padding failures from encoding failures.
    #[error("Decryption failed: {context}")]
    DecryptionFailed {
        /// Where decryption failed
        context: &'static str,
    },

    /// Reading, writing or removing persisted key material failed
    #[error("Key store error: {context}: {message}")]
    KeyStore {
        /// Operation on the store
        context: &'static str,
        /// Underlying I/O message
        message: String,
    },

    /// The system random source failed
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        /// What was being generated
        context: &'static str,
        /// Underlying error message
        message: String,
    },
}

/// Result type for cipher engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Short, stable name of the error kind, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKeyMaterial { .. } => "invalid_key_material",
            Self::InvalidPadding { .. } => "invalid_padding",
            Self::InvalidEncoding { .. } => "invalid_encoding",
            Self::InvalidCiphertextLength { .. } => "invalid_ciphertext_length",
            Self::NotInitialized { .. } => "not_initialized",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::EncryptionFailed { .. } => "encryption_failed",
            Self::DecryptionFailed { .. } => "decryption_failed",
            Self::KeyStore { .. } => "key_store",
            Self::RandomGeneration { .. } => "random_generation",
        }
    }
}
