//! Operating-system randomness for key material, IVs and salts

use lockbox_api::error::{Error, Result};
use lockbox_params::KDF_SALT_SIZE;
use rand::rngs::OsRng;
use rand::RngCore;

/// Fill `buf` from the operating system CSPRNG
pub(crate) fn fill(buf: &mut [u8], context: &'static str) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| Error::RandomGeneration {
            context,
            message: e.to_string(),
        })
}

/// Return `N` random bytes
pub(crate) fn random_array<const N: usize>(context: &'static str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    fill(&mut out, context)?;
    Ok(out)
}

/// Return `length` cryptographically random bytes
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; length];
    fill(&mut out, "generate_random_bytes")?;
    Ok(out)
}

/// Return a random 16-byte salt for password derivation
pub fn generate_salt() -> Result<[u8; KDF_SALT_SIZE]> {
    random_array("generate_salt")
}
