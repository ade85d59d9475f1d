//! Source locations attached to diagnostic messages.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder file name used when a diagnostic has no source file.
pub const NO_FILE: &str = "[No file]";

/// The kind of file a location points into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LocationKind {
    /// A library definition file (declarations shipped with the checker or
    /// configured as libs).
    LibFile,
    /// An ordinary checked source file.
    SourceFile,
    /// A JSON module.
    JsonFile,
    /// A non-code resource (images, stylesheets) imported as a module.
    ResourceFile,
    /// A builtin definition with no backing file.
    #[serde(rename = "Builtins", alias = "Builtin")]
    Builtin,
}

/// A range in a source file, as reported by the type-checker.
///
/// `source` is `None` for synthetic locations that have no backing file.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The file path, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// What kind of file `source` is.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LocationKind>,
    /// Start of the range (inclusive).
    pub start: Position,
    /// End of the range.
    pub end: Position,
}

impl SourceLocation {
    /// Creates a location in an ordinary source file.
    pub fn new(source: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            source: Some(source.into()),
            kind: Some(LocationKind::SourceFile),
            start,
            end,
        }
    }

    /// Sets the file kind of this location.
    pub fn with_kind(mut self, kind: LocationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns the file path, or [`NO_FILE`] for synthetic locations.
    pub fn source_or_placeholder(&self) -> &str {
        self.source.as_deref().unwrap_or(NO_FILE)
    }

    /// Returns `true` if the range starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if `start` is not after `end`.
    ///
    /// Reversed ranges still render; their underline degrades to one caret.
    pub fn is_well_ordered(&self) -> bool {
        self.start.is_at_or_before(&self.end)
    }

    /// Returns `true` if this location points into a library file.
    pub fn is_lib_file(&self) -> bool {
        self.kind == Some(LocationKind::LibFile)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_or_placeholder(), self.start.line)
    }
}
