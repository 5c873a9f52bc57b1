//! Error handling for cipher primitives

use core::fmt;

use lockbox_api::Error as CoreError;

/// The error type for cipher primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error for keys, IVs, salts and single blocks
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Input to a chaining mode is not a whole number of blocks
    BlockAlignment {
        /// Context where the misalignment was detected
        context: &'static str,
        /// Block size in bytes
        block_size: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// PKCS#7 padding failed verification
    Padding {
        /// Context where the padding was rejected
        context: &'static str,
    },

    /// Base64 text failed to decode
    Encoding {
        /// Byte offset into the input where decoding stopped
        position: usize,
        /// What was wrong at that position
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cipher primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::BlockAlignment { context, block_size, actual } => {
                write!(
                    f,
                    "Invalid length for {}: {} is not a positive multiple of {}",
                    context, actual, block_size
                )
            }
            Error::Padding { context } => write!(f, "Invalid padding in {}", context),
            Error::Encoding { position, reason } => {
                write!(f, "Invalid Base64 at position {}: {}", position, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidKeyMaterial {
                context,
                expected,
                actual,
            },
            Error::BlockAlignment { context, block_size, actual } => {
                CoreError::InvalidCiphertextLength {
                    context,
                    block_size,
                    actual,
                }
            }
            Error::Padding { context } => CoreError::InvalidPadding { context },
            Error::Encoding { position, reason } => CoreError::InvalidEncoding {
                context: "base64",
                message: format!("{} at position {}", reason, position),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
