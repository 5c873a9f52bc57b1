//! Cipher primitives for the lockbox engine
//!
//! Everything the engine needs to turn a password-manager secret into
//! transportable text, implemented without an external cryptographic library:
//!
//! - GF(2^8) arithmetic over the AES reduction polynomial
//! - Substitution and round-constant tables
//! - AES-256 key expansion and two block transforms: the legacy round
//!   structure vault entries were sealed with, and FIPS 197
//! - CBC chaining (NIST SP 800-38A)
//! - PKCS#7 padding
//! - Base64 with the standard alphabet
//! - The legacy password-based key derivation routine
//!
//! The primitives are stateless apart from the expanded key schedule, which
//! is immutable once built and may be shared by reference.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Finite field arithmetic
pub mod gf;

// Block cipher and chaining mode
pub mod block;
pub use block::{Aes256, BlockCipher, Cbc, KeySchedule, LegacyAes256};

// Padding scheme
pub mod padding;
pub use padding::pkcs7;

// Text encoding
pub mod encoding;
pub use encoding::base64;

// Key derivation
pub mod kdf;
pub use kdf::derive_key;

// Re-export security types
pub use lockbox_common::security::{SecretBuffer, SecretVec};
