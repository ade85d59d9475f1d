//! Expands one diagnostic into the ordered list of units to render.
//!
//! Planning happens in two steps. First the parts of the error are laid out
//! in a fixed order:
//!
//! 1. a `<file>:<line>` header comment
//! 2. an optional classification line (internal error, library error)
//! 3. the operation, followed by an `Error:` separator comment
//! 4. the primary message
//! 5. the `extra` tree, flattened and indented
//! 6. a `Trace:` heading followed by the trace
//!
//! Then a merge pass folds every location-less comment into the text of the
//! unit before it, so each rendered line is anchored where possible.

use crate::diagnostic::DiagnosticError;
use crate::extra::{flatten_extra, EXTRA_INDENT};
use crate::message::{MessageUnit, UnitType};
use tracing::trace;
use typesift_common::SiftResult;

/// Classification text for internal checker errors.
pub const INTERNAL_ERROR_PREFIX: &str = "Internal error (see logs): ";
/// Classification text for parse errors inside library files.
pub const LIBRARY_PARSE_ERROR: &str = "Library parse error:";
/// Classification text for inference errors inside library files.
pub const LIBRARY_TYPE_ERROR: &str = "Library type error:";

/// Separator placed between the operation and the primary message.
const ERROR_SEPARATOR: &str = "Error:";
/// Heading placed before the trace.
const TRACE_HEADING: &str = "Trace:";

/// Plans the units of `error` in render order, with comments merged.
///
/// # Errors
///
/// Returns an [`InternalError`](typesift_common::InternalError) if the error
/// has an empty `message`.
pub fn plan(error: &DiagnosticError) -> SiftResult<Vec<MessageUnit>> {
    let primary = error.primary()?;

    let mut units = vec![header(error)];
    units.extend(classification(error, primary));
    if let Some(operation) = &error.operation {
        units.push(operation.clone());
        units.push(MessageUnit::comment(ERROR_SEPARATOR));
    }
    units.extend(error.message.iter().cloned());
    if let Some(extra) = &error.extra {
        units.extend(flatten_extra(extra, EXTRA_INDENT));
    }
    if let Some(trace) = error.trace.as_ref().filter(|t| !t.is_empty()) {
        units.push(MessageUnit::comment(TRACE_HEADING));
        units.extend(trace.iter().cloned());
    }

    let laid_out = units.len();
    let merged = merge_comments(units);
    trace!(
        kind = %error.kind,
        laid_out,
        merged = merged.len(),
        "planned diagnostic"
    );
    Ok(merged)
}

/// The `<file>:<line>` comment opening every rendered error.
fn header(error: &DiagnosticError) -> MessageUnit {
    let line = error
        .main_location()
        .map_or(-1, |loc| i64::from(loc.start.line));
    MessageUnit::comment(format!("{}:{line}", error.main_file()))
}

/// The classification line for internal and library errors, anchored where
/// the primary message is.
fn classification(error: &DiagnosticError, primary: &MessageUnit) -> Option<MessageUnit> {
    let in_lib_file = primary.loc.as_ref().is_some_and(|loc| loc.is_lib_file());
    let text = if error.is_internal_error() {
        INTERNAL_ERROR_PREFIX
    } else if in_lib_file && error.kind == "parse" && error.level == "error" {
        LIBRARY_PARSE_ERROR
    } else if in_lib_file && error.kind == "infer" {
        LIBRARY_TYPE_ERROR
    } else {
        return None;
    };

    Some(MessageUnit {
        text: text.to_string(),
        unit_type: UnitType::Anchored,
        context: primary.context.clone(),
        loc: primary.loc.clone(),
        indent: None,
    })
}

/// Folds location-less comments into the preceding unit's text.
///
/// A unit is kept as its own line when it has a location, is anchored, or
/// has nothing before it to merge into. Other comments are appended to the
/// previous line as `"<prev>. <text>"`, except the `Error:` separator, which
/// is dropped: it only stands on its own when an anchored unit follows the
/// operation.
fn merge_comments(units: Vec<MessageUnit>) -> Vec<MessageUnit> {
    let mut merged: Vec<MessageUnit> = Vec::with_capacity(units.len());
    for unit in units {
        let standalone = unit.loc.is_some() || unit.unit_type == UnitType::Anchored;
        match merged.last_mut() {
            Some(prev) if !standalone => {
                if unit.text != ERROR_SEPARATOR {
                    append_sentence(&mut prev.text, &unit.text);
                }
            }
            _ => merged.push(unit),
        }
    }
    merged
}

fn append_sentence(prev: &mut String, text: &str) {
    if !prev.is_empty() {
        prev.push_str(". ");
    }
    prev.push_str(text);
}
