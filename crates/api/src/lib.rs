//! Public error type and validation helpers for the lockbox cipher engine
//!
//! Every fallible operation in the workspace eventually reports one of the
//! [`Error`] kinds defined here. Primitive-level errors from
//! `lockbox-algorithms` convert into this type at the crate boundary.

#![forbid(unsafe_code)]

pub mod error;

pub use error::{validate, Error, Result};
