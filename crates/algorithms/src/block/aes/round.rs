//! Round steps shared by both AES-256 variants
//!
//! The 16-byte state is column-major: byte `4c + r` is row `r` of column `c`.

use super::tables::{INV_SBOX, SBOX};
use crate::block::Block;
use crate::gf::{multiply, xtime};

pub(super) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

pub(super) fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// Row `r` rotates left by `r` positions
pub(super) fn shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * c + r] = old[4 * ((c + r) % 4) + r];
        }
    }
}

pub(super) fn inv_shift_rows(state: &mut Block) {
    let old = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[4 * ((c + r) % 4) + r] = old[4 * c + r];
        }
    }
}

/// Each column is multiplied by {03}x³ + {01}x² + {01}x + {02}
pub(super) fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [col[0], col[1], col[2], col[3]];
        col[0] = xtime(s0) ^ xtime(s1) ^ s1 ^ s2 ^ s3;
        col[1] = s0 ^ xtime(s1) ^ xtime(s2) ^ s2 ^ s3;
        col[2] = s0 ^ s1 ^ xtime(s2) ^ xtime(s3) ^ s3;
        col[3] = xtime(s0) ^ s0 ^ s1 ^ s2 ^ xtime(s3);
    }
}

/// Each column is multiplied by {0b}x³ + {0d}x² + {09}x + {0e}
pub(super) fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let s = [col[0], col[1], col[2], col[3]];
        for (r, out) in col.iter_mut().enumerate() {
            *out = multiply(s[r], 0x0e)
                ^ multiply(s[(r + 1) % 4], 0x0b)
                ^ multiply(s[(r + 2) % 4], 0x0d)
                ^ multiply(s[(r + 3) % 4], 0x09);
        }
    }
}
