//! The full result of one type-checker run.

use crate::diagnostic::DiagnosticError;
use serde::{Deserialize, Serialize};

/// Pass/fail status plus the ordered list of reported errors.
///
/// `passed` is expected to equal `errors.is_empty()`; use
/// [`DiagnosticReport::new`] to construct reports that hold this by
/// construction.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    /// Whether the run reported no errors.
    pub passed: bool,
    /// The reported errors, in checker order.
    #[serde(default)]
    pub errors: Vec<DiagnosticError>,
    /// Version string of the checker that produced the report.
    #[serde(rename = "flowVersion", alias = "toolVersion", default)]
    pub tool_version: String,
}

impl DiagnosticReport {
    /// Creates a report, deriving `passed` from `errors`.
    pub fn new(errors: Vec<DiagnosticError>, tool_version: impl Into<String>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
            tool_version: tool_version.into(),
        }
    }

    /// Creates a passing report with no errors.
    pub fn empty(tool_version: impl Into<String>) -> Self {
        Self::new(Vec::new(), tool_version)
    }

    /// Returns the number of reported errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if `passed` agrees with the error list.
    pub fn is_consistent(&self) -> bool {
        self.passed == self.errors.is_empty()
    }
}
