//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints the error and exits
//! non-zero. Errors inside a `session` run are answered in-band instead.

use std::io;

use thiserror::Error;

use crate::schema::SchemaError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or invalid
    #[error("{0}")]
    Config(String),

    /// stdin/stdout failure
    #[error("{0}")]
    Io(String),

    /// Input on stdin is not what the command expects
    #[error("{0}")]
    InvalidInput(String),

    /// Rule set could not be resolved
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        CliError::Io(msg.into())
    }

    /// Invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CliError::InvalidInput(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "FORM_CLI_CONFIG_ERROR",
            CliError::Io(_) => "FORM_CLI_IO_ERROR",
            CliError::InvalidInput(_) => "FORM_CLI_INVALID_INPUT",
            CliError::Schema(e) => e.code(),
        }
    }

    /// Error line as printed on exit
    pub fn report(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
