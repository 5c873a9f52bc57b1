//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector.
//! Follows NIST SP 800-38A.
//!
//! The mode borrows the cipher, so one expanded key schedule can serve any
//! number of messages. No integrity protection is provided: a modified
//! ciphertext either fails padding verification or decrypts to different
//! plaintext.

use lockbox_params::{AES_BLOCK_SIZE, IV_SIZE};
use zeroize::Zeroize;

use crate::block::{Block, BlockCipher};
use crate::error::{validate, Result};
use crate::padding::pkcs7;

/// CBC mode over a borrowed block cipher
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: Block,
}

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block (16 bytes).
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), IV_SIZE)?;

        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(iv);
        Ok(Self { cipher, iv: block })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size; empty input
    /// yields empty output. Apply padding first, or use
    /// [`encrypt_padded`](Self::encrypt_padded).
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE, true)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = prev;
            for (b, p) in block.iter_mut().zip(chunk) {
                *b ^= p;
            }
            self.cipher.encrypt_block(&mut block);
            ciphertext.extend_from_slice(&block);
            prev = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a positive multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE, false)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);
            let current = block;

            self.cipher.decrypt_block(&mut block);
            for (b, p) in block.iter_mut().zip(&prev) {
                *b ^= p;
            }

            plaintext.extend_from_slice(&block);
            prev = current;
        }

        Ok(plaintext)
    }

    /// PKCS#7-pads `plaintext` and encrypts it
    ///
    /// Output is always a positive multiple of the block size.
    pub fn encrypt_padded(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut padded = pkcs7::pad(plaintext, AES_BLOCK_SIZE);
        let result = self.encrypt(&padded);
        padded.zeroize();
        result
    }

    /// Decrypts `ciphertext` and strips its PKCS#7 padding
    pub fn decrypt_padded(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut padded = self.decrypt(ciphertext)?;
        let unpadded_len = pkcs7::unpad(&padded, AES_BLOCK_SIZE).map(<[u8]>::len);
        match unpadded_len {
            Ok(len) => {
                padded[len..].zeroize();
                padded.truncate(len);
                Ok(padded)
            }
            Err(e) => {
                padded.zeroize();
                Err(e)
            }
        }
    }
}

impl<B: BlockCipher> Drop for Cbc<'_, B> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}
