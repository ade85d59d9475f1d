//! Set difference between two reports, surfacing only newly introduced errors.

use crate::diagnostic::DiagnosticError;
use crate::message::MessageUnit;
use crate::report::DiagnosticReport;
use std::collections::HashSet;
use tracing::debug;

/// Returns the identity of `error` for differencing purposes.
///
/// Only the `message` sequence takes part: two errors with structurally equal
/// messages are the same error even if their `kind`, `level`, `operation`,
/// `trace`, or `extra` differ.
pub fn message_key(error: &DiagnosticError) -> &[MessageUnit] {
    &error.message
}

/// Returns the errors of `current` that do not appear in `baseline`.
///
/// Surviving errors keep their relative order from `current` and are cloned,
/// so the result shares nothing with either input. `passed` is recomputed from
/// the surviving errors and `tool_version` is taken from `current`.
pub fn difference(current: &DiagnosticReport, baseline: &DiagnosticReport) -> DiagnosticReport {
    let known: HashSet<&[MessageUnit]> = baseline.errors.iter().map(message_key).collect();

    let fresh: Vec<DiagnosticError> = current
        .errors
        .iter()
        .filter(|error| !known.contains(message_key(error)))
        .cloned()
        .collect();

    debug!(
        current = current.error_count(),
        baseline = baseline.error_count(),
        new = fresh.len(),
        "computed report difference"
    );

    DiagnosticReport::new(fresh, current.tool_version.clone())
}
