//! AES-256 key expansion
//!
//! A 32-byte key expands into 60 big-endian words. Words `4r..4r+3` form
//! the round key for round `r`, with round 0 the initial whitening and
//! round 14 the final round.

use core::fmt;

use lockbox_params::{AES256_KEY_SIZE, AES256_KEY_WORDS, AES256_ROUNDS, AES256_SCHEDULE_WORDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::tables::{RCON, SBOX};
use crate::block::Block;
use crate::error::{validate, Result};

/// Substitutes each byte of a word through the forward S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| SBOX[b as usize]))
}

/// Expanded AES-256 key schedule
///
/// Immutable after construction; zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; AES256_SCHEDULE_WORDS],
}

impl KeySchedule {
    /// Expand a 32-byte key
    ///
    /// Fails with a length error for any other key size.
    pub fn expand(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;

        let mut words = [0u32; AES256_SCHEDULE_WORDS];
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in AES256_KEY_WORDS..AES256_SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % AES256_KEY_WORDS == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / AES256_KEY_WORDS];
            } else if i % AES256_KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - AES256_KEY_WORDS] ^ temp;
        }

        Ok(Self { words })
    }

    /// Schedule word `index` (0..60)
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn word(&self, index: usize) -> u32 {
        self.words[index]
    }

    /// Round key for `round` (0..=14) in state byte order
    ///
    /// # Panics
    ///
    /// Panics if `round` is out of range.
    pub fn round_key(&self, round: usize) -> Block {
        assert!(round <= AES256_ROUNDS, "AES-256 has rounds 0..=14");
        let mut out = [0u8; 16];
        for (c, bytes) in out.chunks_exact_mut(4).enumerate() {
            bytes.copy_from_slice(&self.words[4 * round + c].to_be_bytes());
        }
        out
    }

    /// XOR the round key for `round` into `state`
    #[inline(always)]
    pub(crate) fn add_round_key(&self, state: &mut Block, round: usize) {
        for c in 0..4 {
            let w = self.words[4 * round + c].to_be_bytes();
            for r in 0..4 {
                state[4 * c + r] ^= w[r];
            }
        }
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySchedule([REDACTED])")
    }
}
