//! Engine facade for the lockbox cipher
//!
//! An [`Engine`] turns vault field values into Base64 ciphertext and back.
//! It starts uninitialized and becomes ready once it holds a key/IV pair,
//! which comes from exactly one of three places:
//!
//! - a password and salt through [`KeyMaterial::derive`]
//! - the key files managed by a [`KeyStore`]
//! - fresh random bytes through [`KeyMaterial::generate`]
//!
//! ```no_run
//! use lockbox_engine::{Engine, EngineConfig, KeyStore};
//!
//! # fn main() -> lockbox_api::Result<()> {
//! let store = KeyStore::in_dir("/var/lib/vault");
//! let mut engine = Engine::new(EngineConfig::default());
//! engine.load_or_generate(&store)?;
//!
//! let sealed = engine.encrypt("correct horse battery staple")?;
//! assert_eq!(engine.decrypt(&sealed)?, "correct horse battery staple");
//! # Ok(())
//! # }
//! ```
//!
//! The ciphertext is confidential but not authenticated. Callers must not
//! rely on decryption failing for modified input.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod material;
pub mod random;
pub mod store;

pub use config::{BlockTransform, EngineConfig, IvPolicy};
pub use engine::Engine;
pub use material::KeyMaterial;
pub use random::{generate_random_bytes, generate_salt};
pub use store::KeyStore;

// Re-export the API error system
pub use lockbox_api::error::{Error, Result};
