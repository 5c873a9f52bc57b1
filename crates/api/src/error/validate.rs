//! Validation utilities that report [`Error`] kinds directly

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate the length of key or IV material
#[inline(always)]
pub fn key_material(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyMaterial {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a ciphertext is a positive multiple of the block size
#[inline(always)]
pub fn ciphertext_length(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual == 0 || actual % block_size != 0 {
        return Err(Error::InvalidCiphertextLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
