//! Diagnostic report model, report differencing, and text rendering.
//!
//! This crate models the structured report a static type-checker emits
//! ([`DiagnosticReport`] of [`DiagnosticError`]s built from [`MessageUnit`]s),
//! computes which errors are new relative to a baseline ([`difference`]), and
//! renders reports as deterministic terminal text with source snippets and
//! column-accurate underlines ([`format_report`], [`format_report_with_header`]).

#![warn(missing_docs)]

pub mod diagnostic;
pub mod difference;
pub mod extra;
pub mod formatter;
pub mod message;
pub mod planner;
pub mod renderer;
pub mod report;

pub use diagnostic::DiagnosticError;
pub use difference::{difference, message_key};
pub use extra::{flatten_extra, ExtraGroup, ExtraTree};
pub use formatter::{format_report, format_report_with_header, render_error};
pub use message::{MessageUnit, UnitType};
pub use planner::plan;
pub use renderer::{render_unit, JsonRenderer, ReportRenderer, TextRenderer};
pub use report::DiagnosticReport;
