//! Base64 with the standard alphabet and `=` padding (RFC 4648 section 4)
//!
//! Decoding is strict: the input length must be a multiple of four, `=`
//! may only appear as the last one or two characters, any other character
//! outside the alphabet is rejected with its position, and the unused low
//! bits of the final character must be zero. Under these rules `encode`
//! and `decode` are exact inverses.

use crate::error::{Error, Result};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';
const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Length of the encoding of `len` bytes
pub fn encoded_len(len: usize) -> usize {
    (len + 2) / 3 * 4
}

/// Encode bytes as padded Base64
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    for chunk in data.chunks(3) {
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let n = (chunk[0] as u32) << 16 | (b1 as u32) << 8 | b2 as u32;

        out.push(ALPHABET[(n >> 18) as usize & 63] as char);
        out.push(ALPHABET[(n >> 12) as usize & 63] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[(n >> 6) as usize & 63] as char
        } else {
            PAD as char
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[n as usize & 63] as char
        } else {
            PAD as char
        });
    }

    out
}

/// Decode padded Base64
///
/// The empty string decodes to no bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let input = text.as_bytes();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.len() % 4 != 0 {
        return Err(Error::Encoding {
            position: input.len(),
            reason: "length is not a multiple of 4",
        });
    }

    let pad = input.iter().rev().take(2).take_while(|&&c| c == PAD).count();
    let data_len = input.len() - pad;
    let mut out = Vec::with_capacity(input.len() / 4 * 3);

    for (q, quad) in input.chunks_exact(4).enumerate() {
        let mut n = 0u32;
        let mut sextets = 0usize;

        for (j, &c) in quad.iter().enumerate() {
            let position = 4 * q + j;
            if position >= data_len {
                break;
            }
            let v = DECODE_TABLE[c as usize];
            if v == INVALID {
                return Err(Error::Encoding {
                    position,
                    reason: if c == PAD {
                        "padding before end of input"
                    } else {
                        "invalid character"
                    },
                });
            }
            n = n << 6 | v as u32;
            sextets += 1;
        }

        // Only the final quad can be short, and padding leaves at least two sextets
        match sextets {
            4 => out.extend_from_slice(&[(n >> 16) as u8, (n >> 8) as u8, n as u8]),
            3 => {
                check_trailing_bits(n & 0x3, data_len - 1)?;
                out.extend_from_slice(&[(n >> 10) as u8, (n >> 2) as u8]);
            }
            _ => {
                check_trailing_bits(n & 0xF, data_len - 1)?;
                out.push((n >> 4) as u8);
            }
        }
    }

    Ok(out)
}

fn check_trailing_bits(bits: u32, position: usize) -> Result<()> {
    if bits != 0 {
        return Err(Error::Encoding {
            position,
            reason: "non-zero trailing bits",
        });
    }
    Ok(())
}
