//! Runtime configuration for an [`Engine`](crate::Engine)

use lockbox_params::KDF_DEFAULT_ITERATIONS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the CBC initialization vector is chosen for each message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IvPolicy {
    /// Draw a fresh random IV for every message and prepend it to the
    /// ciphertext before encoding
    #[default]
    PerMessage,

    /// Reuse the IV from the installed key material for every message
    ///
    /// Output is deterministic, so equal plaintexts produce equal
    /// ciphertexts. Together with [`BlockTransform::Legacy`] this reads and
    /// writes vaults sealed before per-message IVs.
    Fixed,
}

/// Which AES-256 round structure the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockTransform {
    /// The round structure existing vault entries were sealed with
    #[default]
    Legacy,
    /// AES-256 as specified in FIPS 197
    Fips197,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// IV selection for `encrypt` and the framing expected by `decrypt`
    pub iv_policy: IvPolicy,
    /// Block cipher round structure
    pub transform: BlockTransform,
    /// Iteration count for password derivation
    pub kdf_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iv_policy: IvPolicy::PerMessage,
            transform: BlockTransform::Legacy,
            kdf_iterations: KDF_DEFAULT_ITERATIONS,
        }
    }
}

impl EngineConfig {
    /// Configuration that reads and writes existing vaults byte for byte:
    /// one fixed IV and the legacy round structure
    pub fn legacy() -> Self {
        Self::default()
            .with_iv_policy(IvPolicy::Fixed)
            .with_transform(BlockTransform::Legacy)
    }

    /// Set the IV policy
    pub fn with_iv_policy(mut self, iv_policy: IvPolicy) -> Self {
        self.iv_policy = iv_policy;
        self
    }

    /// Set the block cipher round structure
    pub fn with_transform(mut self, transform: BlockTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the derivation iteration count
    pub fn with_kdf_iterations(mut self, kdf_iterations: u32) -> Self {
        self.kdf_iterations = kdf_iterations;
        self
    }
}
