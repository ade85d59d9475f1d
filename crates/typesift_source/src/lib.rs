//! Source positions and locations as reported by the type-checker.
//!
//! This crate provides [`Position`] (1-indexed line/column plus byte offset)
//! and [`SourceLocation`], the file-and-range a diagnostic message points at.

#![warn(missing_docs)]

pub mod location;
pub mod position;

pub use location::{LocationKind, SourceLocation, NO_FILE};
pub use position::Position;
