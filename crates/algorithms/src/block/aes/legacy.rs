//! Legacy AES-256 round structure
//!
//! Existing vault entries were sealed with this transform, so it must be
//! reproduced byte for byte. It shares the FIPS 197 key schedule, S-box and
//! round steps but arranges the rounds differently:
//!
//! 1. AddRoundKey with round key 0
//! 2. rounds 1 to 13: SubBytes, ShiftRows, MixColumns (skipped in round 13),
//!    AddRoundKey with round key `r`
//! 3. AddRoundKey with round key 14, with no substitution or row shift
//!
//! Decryption applies the inverse steps in reverse order, so every block
//! decrypts to what was encrypted. The output is not FIPS 197 AES-256 and
//! must not be mixed with [`Aes256`](super::Aes256) ciphertext.

use lockbox_params::AES256_ROUNDS;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::round::{
    inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows, sub_bytes,
};
use super::KeySchedule;
use crate::block::{Block, BlockCipher};
use crate::error::Result;

/// Last round that runs the substitution and row shift
const LAST_FULL_ROUND: usize = AES256_ROUNDS - 1;

/// AES-256 with the legacy round structure
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct LegacyAes256 {
    schedule: KeySchedule,
}

impl LegacyAes256 {
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

impl BlockCipher for LegacyAes256 {
    fn name() -> &'static str {
        "AES-256 (legacy rounds)"
    }

    fn encrypt_block(&self, block: &mut Block) {
        let ks = &self.schedule;

        ks.add_round_key(block, 0);

        for round in 1..=LAST_FULL_ROUND {
            sub_bytes(block);
            shift_rows(block);
            if round != LAST_FULL_ROUND {
                mix_columns(block);
            }
            ks.add_round_key(block, round);
        }

        ks.add_round_key(block, AES256_ROUNDS);
    }

    fn decrypt_block(&self, block: &mut Block) {
        let ks = &self.schedule;

        ks.add_round_key(block, AES256_ROUNDS);

        for round in (1..=LAST_FULL_ROUND).rev() {
            ks.add_round_key(block, round);
            if round != LAST_FULL_ROUND {
                inv_mix_columns(block);
            }
            inv_shift_rows(block);
            inv_sub_bytes(block);
        }

        ks.add_round_key(block, 0);
    }
}
