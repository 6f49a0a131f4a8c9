//! Schema error types
//!
//! These cover broken rule sets and unreadable inputs. A record that
//! breaks a rule is never a `SchemaError`; it is reported through
//! `ValidationResult::Invalid`.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building, loading or reading against a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A `pattern` check does not compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Schema without a single field
    #[error("Schema '{schema}' declares no fields")]
    NoFields { schema: String },

    /// Field declared with an empty name
    #[error("Schema '{schema}' declares a field with an empty name")]
    EmptyFieldName { schema: String },

    /// Same field name declared twice
    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    /// `matches` check pointing at an undeclared field
    #[error("Field '{field}' must match undeclared field '{target}'")]
    UnknownMatchTarget { field: String, target: String },

    /// `matches` check pointing at its own field
    #[error("Field '{field}' cannot be matched against itself")]
    SelfMatch { field: String },

    /// Number field that could normalize to a non-integer
    #[error("Number field '{field}' needs both 'number' and 'integer' checks")]
    IncompleteNumberField { field: String },

    /// Schema file missing, unreadable or not valid JSON
    #[error("Malformed schema file '{path}': {reason}")]
    MalformedFile { path: String, reason: String },

    /// Input record is not a JSON object of scalars
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl SchemaError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidPattern { .. } => "FORM_SCHEMA_INVALID_PATTERN",
            SchemaError::NoFields { .. } => "FORM_SCHEMA_NO_FIELDS",
            SchemaError::EmptyFieldName { .. } => "FORM_SCHEMA_EMPTY_FIELD_NAME",
            SchemaError::DuplicateField { .. } => "FORM_SCHEMA_DUPLICATE_FIELD",
            SchemaError::UnknownMatchTarget { .. } => "FORM_SCHEMA_UNKNOWN_MATCH_TARGET",
            SchemaError::SelfMatch { .. } => "FORM_SCHEMA_SELF_MATCH",
            SchemaError::IncompleteNumberField { .. } => "FORM_SCHEMA_INCOMPLETE_NUMBER_FIELD",
            SchemaError::MalformedFile { .. } => "FORM_SCHEMA_MALFORMED_FILE",
            SchemaError::MalformedRecord(_) => "FORM_MALFORMED_RECORD",
        }
    }
}
