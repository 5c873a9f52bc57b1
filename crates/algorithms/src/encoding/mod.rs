//! Text encodings for ciphertext transport

pub mod base64;
