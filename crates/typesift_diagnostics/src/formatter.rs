//! Report-level formatting: one text block per error, with an optional count.

use crate::diagnostic::DiagnosticError;
use crate::planner::plan;
use crate::renderer::render_unit;
use crate::report::DiagnosticReport;
use tracing::debug;
use typesift_common::{InternalError, SiftResult};

/// Text returned for a passing report.
pub const NO_ERRORS: &str = "No errors";

/// Renders one error as newline-separated lines.
///
/// # Errors
///
/// Returns an [`InternalError`] if the error has an empty `message`.
pub fn render_error(error: &DiagnosticError) -> SiftResult<String> {
    let main_file = error.main_file();
    let lines: Vec<String> = plan(error)?
        .iter()
        .map(|unit| render_unit(main_file, unit))
        .collect();
    Ok(lines.join("\n"))
}

/// Renders every error of `report`, separated by blank lines.
///
/// # Errors
///
/// Returns the first [`InternalError`] encountered, tagged with the index of
/// the offending error.
pub fn format_report(report: &DiagnosticReport) -> SiftResult<String> {
    let blocks = report
        .errors
        .iter()
        .enumerate()
        .map(|(index, error)| render_error(error).map_err(|e| e.at_diagnostic(index)))
        .collect::<SiftResult<Vec<_>>>()?;

    debug!(errors = blocks.len(), "formatted report");
    Ok(blocks.join("\n\n"))
}

/// Renders `report` preceded by an `<N> error(s)` line, or returns
/// [`NO_ERRORS`] for a passing report.
///
/// # Errors
///
/// Returns an [`InternalError`] if `passed` disagrees with the error list, or
/// if any error fails to render.
pub fn format_report_with_header(report: &DiagnosticReport) -> SiftResult<String> {
    if !report.is_consistent() {
        return Err(InternalError::new(format!(
            "report has passed={} but lists {} errors",
            report.passed,
            report.error_count()
        )));
    }
    if report.passed {
        return Ok(NO_ERRORS.to_string());
    }
    Ok(format!(
        "{}\n{}",
        count_line(report.error_count()),
        format_report(report)?
    ))
}

fn count_line(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} error{plural}")
}
