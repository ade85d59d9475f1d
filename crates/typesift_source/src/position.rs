//! Line/column positions within a source file.

use serde::{Deserialize, Serialize};

/// A single point in a source file.
///
/// `line` and `column` are 1-indexed, `offset` is a 0-indexed byte offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed).
    pub column: u32,
    /// Byte offset from the start of the file.
    #[serde(default)]
    pub offset: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the zero-based column, clamping a malformed column `0` to `0`.
    pub fn zero_based_column(&self) -> usize {
        self.column.saturating_sub(1) as usize
    }

    /// Returns `true` if this position is not after `other`, comparing
    /// `(line, column)` lexicographically and ignoring the offset.
    pub fn is_at_or_before(&self, other: &Position) -> bool {
        (self.line, self.column) <= (other.line, other.column)
    }
}
