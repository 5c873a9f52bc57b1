//! Constants for the AES-256-CBC cipher

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one block)
pub const IV_SIZE: usize = AES_BLOCK_SIZE;

/// Number of rounds for a 256-bit key
pub const AES256_ROUNDS: usize = 14;

/// Number of key words (Nk) in a 256-bit key
pub const AES256_KEY_WORDS: usize = AES256_KEY_SIZE / 4;

/// Number of 32-bit words in the expanded AES-256 key schedule
pub const AES256_SCHEDULE_WORDS: usize = 4 * (AES256_ROUNDS + 1);

