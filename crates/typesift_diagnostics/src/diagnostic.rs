//! A single reported problem with its explanation and supporting context.

use crate::extra::ExtraTree;
use crate::message::MessageUnit;
use serde::{Deserialize, Serialize};
use typesift_common::{InternalError, SiftResult};
use typesift_source::{SourceLocation, NO_FILE};

/// One problem reported by the type-checker.
///
/// `message[0]` is the primary explanation. The optional parts add context:
/// - `operation`: the operation during which the problem was found
/// - `extra`: nested groups of supplementary explanation
/// - `trace`: the checker's reasoning trace
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticError {
    /// The error class, e.g. `"infer"`, `"parse"`, `"internal"`.
    pub kind: String,
    /// The severity, e.g. `"error"` or `"warning"`.
    pub level: String,
    /// The explanation, primary unit first. Must not be empty.
    pub message: Vec<MessageUnit>,
    /// The reasoning trace, if the checker produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<MessageUnit>>,
    /// The operation that triggered the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<MessageUnit>,
    /// Nested supplementary explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraTree>,
}

impl DiagnosticError {
    /// Creates an error with the given kind, level, and message.
    pub fn new(
        kind: impl Into<String>,
        level: impl Into<String>,
        message: Vec<MessageUnit>,
    ) -> Self {
        Self {
            kind: kind.into(),
            level: level.into(),
            message,
            trace: None,
            operation: None,
            extra: None,
        }
    }

    /// Sets the operation context.
    pub fn with_operation(mut self, operation: MessageUnit) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the supplementary explanation tree.
    pub fn with_extra(mut self, extra: ExtraTree) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Sets the reasoning trace.
    pub fn with_trace(mut self, trace: Vec<MessageUnit>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Returns the primary message unit.
    ///
    /// # Errors
    ///
    /// Returns an [`InternalError`] if `message` is empty.
    pub fn primary(&self) -> SiftResult<&MessageUnit> {
        self.message
            .first()
            .ok_or_else(|| InternalError::new("error record has an empty message"))
    }

    /// Returns the most authoritative location of this error: the operation's
    /// location if it has one, otherwise the primary message's.
    pub fn main_location(&self) -> Option<&SourceLocation> {
        self.operation
            .as_ref()
            .and_then(|op| op.loc.as_ref())
            .or_else(|| self.message.first().and_then(|m| m.loc.as_ref()))
    }

    /// Returns the file of [`main_location`](Self::main_location), or
    /// [`NO_FILE`] when there is none.
    pub fn main_file(&self) -> &str {
        self.main_location()
            .map_or(NO_FILE, SourceLocation::source_or_placeholder)
    }

    /// Returns `true` for internal checker errors at error level.
    pub fn is_internal_error(&self) -> bool {
        self.kind == "internal" && self.level == "error"
    }
}
