//! Text rendering of message units and whole reports.

use crate::formatter::{format_report, format_report_with_header};
use crate::message::MessageUnit;
use crate::report::DiagnosticReport;
use typesift_common::SiftResult;
use typesift_source::SourceLocation;

/// Trait for rendering a report into an output string.
///
/// Implementations produce either the human-readable text form or the
/// report's JSON form, which can be fed back in as a baseline.
pub trait ReportRenderer {
    /// Renders `report` into a formatted string.
    fn render(&self, report: &DiagnosticReport) -> SiftResult<String>;
}

/// Renders reports as plain terminal text with source snippets.
///
/// A single error renders like:
/// ```text
/// src/app.js:3
///   3: foo();
///      ^^^ Cannot call function
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer {
    /// Whether to prefix the output with an error count (or `No errors`).
    pub header: bool,
}

impl TextRenderer {
    /// Creates a new text renderer.
    pub fn new(header: bool) -> Self {
        Self { header }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &DiagnosticReport) -> SiftResult<String> {
        if self.header {
            format_report_with_header(report)
        } else {
            format_report(report)
        }
    }
}

/// Renders reports in the checker's own JSON shape.
#[derive(Clone, Copy, Debug)]
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON.
    pub pretty: bool,
}

impl JsonRenderer {
    /// Creates a new JSON renderer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &DiagnosticReport) -> SiftResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

/// Renders one planned unit against the error's main file.
///
/// Units without a location render as their indented text. Located units with
/// a `context` line get a numbered source line and a caret underline, with
/// the text on the underline line:
/// ```text
///  12: let x: number = "a";
///                      ^^^ string
/// ```
/// Units located outside `main_file` end with `. See: <source>:<line>`.
pub fn render_unit(main_file: &str, unit: &MessageUnit) -> String {
    let indent = " ".repeat(unit.indent_width() as usize);
    let Some(loc) = &unit.loc else {
        return format!("{indent}{}", unit.text);
    };

    let mut line = match &unit.context {
        Some(context) => source_snippet(&indent, context, loc),
        None => indent,
    };
    line.push_str(&unit.text);
    if loc.source_or_placeholder() != main_file {
        line.push_str(&format!(". See: {loc}"));
    }
    line
}

/// Returns the number of carets under `loc`: the span width on a single line,
/// at least one, and exactly one for multi-line or reversed spans.
pub fn underline_len(loc: &SourceLocation) -> usize {
    if !loc.is_single_line() || !loc.is_well_ordered() {
        return 1;
    }
    (loc.end.column as usize)
        .saturating_sub(loc.start.zero_based_column())
        .max(1)
}

/// The numbered source line plus the start of the underline line.
fn source_snippet(indent: &str, context: &str, loc: &SourceLocation) -> String {
    let start_col = loc.start.zero_based_column();
    let label = format!("{:>3}: ", loc.start.line);

    let mut padding = " ".repeat(label.len());
    if context.chars().count() >= start_col {
        padding.extend(context.chars().take(start_col).map(blank_out));
    }
    let underline = "^".repeat(underline_len(loc));

    format!("{indent}{label}{context}\n{indent}{padding}{underline} ")
}

/// Keeps tabs and spaces so the caret lines up under tab-indented code.
fn blank_out(c: char) -> char {
    if c == '\t' {
        '\t'
    } else {
        ' '
    }
}
