//! Common result and error types for diagnostic processing.

/// The standard result type for diagnostic processing operations.
///
/// `Err` means the input violated a structural precondition (for example an
/// error record with no primary message). It is never used for "the report
/// contains errors", which is ordinary data.
pub type SiftResult<T> = Result<T, InternalError>;

/// A precondition violation detected while processing a diagnostic report.
///
/// Raised instead of producing garbled output, since nothing downstream of the
/// renderer re-validates what it prints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed diagnostic: {message}")]
pub struct InternalError {
    /// Description of the violated precondition.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefixes the message with the position of the diagnostic it concerns.
    pub fn at_diagnostic(self, index: usize) -> Self {
        Self {
            message: format!("diagnostic #{index}: {}", self.message),
        }
    }
}

impl From<serde_json::Error> for InternalError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: format!("serialization failed: {err}"),
        }
    }
}
