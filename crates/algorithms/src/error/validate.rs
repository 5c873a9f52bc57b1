//! Validation utilities for cipher primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `actual` is a multiple of `block_size`, optionally requiring it to be non-zero
#[inline(always)]
pub fn block_aligned(
    context: &'static str,
    actual: usize,
    block_size: usize,
    allow_empty: bool,
) -> Result<()> {
    if actual % block_size != 0 || (actual == 0 && !allow_empty) {
        return Err(Error::BlockAlignment {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
