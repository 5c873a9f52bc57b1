//! PKCS#7 padding (RFC 5652 section 6.3)
//!
//! `pad` always appends between 1 and `block_size` bytes, each equal to the
//! number of bytes appended, so an already aligned message gains a full
//! block. `unpad` verifies every pad byte before stripping.

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Append PKCS#7 padding for `block_size` (1..=255)
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!((1..=255).contains(&block_size));
    let pad_len = block_size - (data.len() % block_size);

    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Verify and strip PKCS#7 padding, returning the unpadded prefix
///
/// Fails when `data` is empty, the final byte is 0 or larger than
/// `block_size` or the data length, or any of the final `n` bytes differs
/// from `n`. The pad bytes are compared without an early exit.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let invalid = Error::Padding { context: "PKCS#7" };

    let last = match data.last() {
        Some(&b) => b as usize,
        None => return Err(invalid),
    };
    if last == 0 || last > block_size || last > data.len() {
        return Err(invalid);
    }

    let split = data.len() - last;
    let mut ok = subtle::Choice::from(1u8);
    for &b in &data[split..] {
        ok &= b.ct_eq(&(last as u8));
    }

    if bool::from(ok) {
        Ok(&data[..split])
    } else {
        Err(invalid)
    }
}
