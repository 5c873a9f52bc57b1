//! Legacy password-based key derivation
//!
//! This is the mixing routine vault files have always been keyed with. It
//! is **not** a vetted key-derivation function: it has no memory hardness,
//! its per-iteration cost is tiny and its output repeats with the buffer
//! length. It is kept so existing vaults remain readable.
//!
//! The algorithm:
//!
//! 1. `buf = password ‖ salt ‖ 00 00 00 01`
//! 2. For each iteration `i`, walk `buf` once with a running byte `h`
//!    starting at 0: `h ^= b; b = rotl(b, 1) ^ (h + i) mod 256`.
//! 3. XOR `buf[j mod len]` into `out[j mod L]` for
//!    `j in 0..max(len, L)`.
//! 4. From a snapshot `s` of `out`, set
//!    `out[k] = s[k] ^ (s[k-1] + s[k+1]) mod 256` with cyclic neighbours.

use lockbox_params::{KDF_COUNTER_BLOCK, KDF_SALT_SIZE};
use zeroize::Zeroize;

use crate::error::{validate, Result};
use lockbox_common::security::SecretVec;

/// Derive `output_len` bytes from `password` and a 16-byte `salt`
///
/// Pure and deterministic. `iterations` and `output_len` must be at least 1.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<SecretVec> {
    validate::length("KDF salt", salt.len(), KDF_SALT_SIZE)?;
    validate::parameter(iterations >= 1, "iterations", "must be at least 1")?;
    validate::parameter(output_len >= 1, "output_len", "must be at least 1")?;

    let mut buf = SecretVec::zeroed(password.len() + salt.len() + KDF_COUNTER_BLOCK.len());
    {
        let b = buf.as_mut_slice();
        let (pw, rest) = b.split_at_mut(password.len());
        let (s, counter) = rest.split_at_mut(salt.len());
        pw.copy_from_slice(password);
        s.copy_from_slice(salt);
        counter.copy_from_slice(&KDF_COUNTER_BLOCK);
    }

    for i in 0..iterations {
        let step = i as u8;
        let mut h = 0u8;
        for b in buf.as_mut_slice() {
            h ^= *b;
            *b = b.rotate_left(1) ^ h.wrapping_add(step);
        }
    }

    let mut out = SecretVec::zeroed(output_len);
    {
        let src = buf.as_slice();
        let dst = out.as_mut_slice();
        for j in 0..src.len().max(output_len) {
            dst[j % output_len] ^= src[j % src.len()];
        }
    }

    let mut snapshot = out.as_slice().to_vec();
    for (k, byte) in out.as_mut_slice().iter_mut().enumerate() {
        let prev = snapshot[(k + output_len - 1) % output_len];
        let next = snapshot[(k + 1) % output_len];
        *byte = snapshot[k] ^ prev.wrapping_add(next);
    }
    snapshot.zeroize();

    Ok(out)
}
