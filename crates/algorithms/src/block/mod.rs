//! Block cipher and chaining mode
//!
//! Two AES-256 round structures are provided, the legacy one vault entries
//! were sealed with and FIPS 197. Chaining is written against the
//! [`BlockCipher`] trait so the mode never reaches into the key schedule.

use lockbox_params::AES_BLOCK_SIZE;

pub mod aes;
pub mod modes;

pub use aes::{Aes256, KeySchedule, LegacyAes256};
pub use modes::Cbc;

/// One cipher block
pub type Block = [u8; AES_BLOCK_SIZE];

/// A keyed 128-bit block cipher
///
/// Implementations hold an already validated key, so the per-block
/// operations cannot fail.
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut Block);
}
