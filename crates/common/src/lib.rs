//! Shared functionality for the lockbox cipher engine
//!
//! This crate holds the containers used for every piece of sensitive
//! material: keys, IVs, expanded key schedules and derived bytes.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretVec};
