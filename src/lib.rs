//! # lockbox
//!
//! Field-level cipher for a password vault: AES-256-CBC with PKCS#7 padding,
//! Base64 transport encoding and password-based key derivation.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! lockbox = "0.3"
//! ```
//!
//! ## Features
//!
//! - `engine` (default): the [`Engine`](engine::Engine) facade, key material and key files
//! - `serde`: serialize [`EngineConfig`](engine::EngineConfig)
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lockbox-api`]: error type and validation helpers
//! - [`lockbox-common`]: zeroizing secret containers
//! - [`lockbox-params`]: sizes and constants
//! - [`lockbox-algorithms`]: AES-256 (legacy and FIPS 197 rounds), CBC, PKCS#7, Base64
//!   and the key derivation
//! - [`lockbox-engine`]: the engine facade

#![forbid(unsafe_code)]

pub use lockbox_algorithms as algorithms;
pub use lockbox_api as api;
pub use lockbox_common as common;
pub use lockbox_params as params;

#[cfg(feature = "engine")]
pub use lockbox_engine as engine;

/// Common imports for lockbox users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::algorithms::{Aes256, BlockCipher, Cbc, LegacyAes256};

    pub use crate::common::{SecretBuffer, SecretVec};

    #[cfg(feature = "engine")]
    pub use crate::engine::{
        BlockTransform, Engine, EngineConfig, IvPolicy, KeyMaterial, KeyStore,
    };
}
