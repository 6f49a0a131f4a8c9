//! Session error types

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from feeding input into a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Input event for a field the schema does not declare
    #[error("Unknown field '{field}' for schema '{schema}'")]
    UnknownField { field: String, schema: String },
}

impl SessionError {
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::UnknownField { .. } => "FORM_UNKNOWN_FIELD",
        }
    }
}
