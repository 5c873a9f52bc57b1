//! AES-256 block ciphers
//!
//! Two round structures share one key schedule and one set of round steps:
//!
//! - [`LegacyAes256`]: the transform vault ciphertexts were written with.
//!   Round 13 skips MixColumns and the last round key is a bare XOR.
//! - [`Aes256`]: AES-256 as specified in FIPS 197. Initial round-key XOR,
//!   13 full rounds (SubBytes, ShiftRows, MixColumns, AddRoundKey) and a
//!   final round without MixColumns.
//!
//! The 16-byte state is kept column-major: byte `4c + r` is row `r` of
//! column `c`, which is exactly the order of the input block.
//!
//! Substitution uses table lookups and is not hardened against cache-timing
//! side channels.

use lockbox_params::AES256_ROUNDS;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{Block, BlockCipher};
use crate::error::Result;

mod key_schedule;
mod legacy;
mod round;
pub mod tables;

pub use key_schedule::KeySchedule;
pub use legacy::LegacyAes256;
use round::{inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows, sub_bytes};

/// AES-256 as specified in FIPS 197
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    schedule: KeySchedule,
}

impl Aes256 {
    /// Expand `key` and build the cipher
    ///
    /// The key must be exactly 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: KeySchedule::expand(key)?,
        })
    }

    /// The expanded key schedule
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }
}

impl BlockCipher for Aes256 {
    fn name() -> &'static str {
        "AES-256"
    }

    fn encrypt_block(&self, block: &mut Block) {
        let ks = &self.schedule;

        ks.add_round_key(block, 0);

        for round in 1..AES256_ROUNDS {
            sub_bytes(block);
            shift_rows(block);
            mix_columns(block);
            ks.add_round_key(block, round);
        }

        // Final round
        sub_bytes(block);
        shift_rows(block);
        ks.add_round_key(block, AES256_ROUNDS);
    }

    fn decrypt_block(&self, block: &mut Block) {
        let ks = &self.schedule;

        ks.add_round_key(block, AES256_ROUNDS);

        for round in (1..AES256_ROUNDS).rev() {
            inv_shift_rows(block);
            inv_sub_bytes(block);
            ks.add_round_key(block, round);
            inv_mix_columns(block);
        }

        inv_shift_rows(block);
        inv_sub_bytes(block);
        ks.add_round_key(block, 0);
    }
}
