//! Shared foundational types used across the typesift crates.
//!
//! This crate provides the internal error and result types used to report
//! malformed diagnostic input.

#![warn(missing_docs)]

pub mod result;

pub use result::{InternalError, SiftResult};
