//! Constant values for the lockbox cipher engine
//!
//! Sizes, round counts and key-derivation defaults shared by every
//! other crate in the workspace. Nothing here allocates or depends on `std`.

#![no_std]
#![forbid(unsafe_code)]

pub mod kdf;
pub mod symmetric;

pub use kdf::*;
pub use symmetric::*;
