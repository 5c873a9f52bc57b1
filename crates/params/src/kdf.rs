//! Constants for password-based key derivation

use crate::symmetric::{AES256_KEY_SIZE, IV_SIZE};

/// Salt size in bytes
pub const KDF_SALT_SIZE: usize = 16;

/// Iteration count used when the caller does not configure one
pub const KDF_DEFAULT_ITERATIONS: u32 = 10_000;

/// Big-endian block counter appended after the password and salt
pub const KDF_COUNTER_BLOCK: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

/// Bytes derived for a key/IV pair: 32 key bytes followed by 16 IV bytes
pub const DERIVED_MATERIAL_SIZE: usize = AES256_KEY_SIZE + IV_SIZE;
