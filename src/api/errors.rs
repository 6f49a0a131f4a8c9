//! API error types
//!
//! API errors are pass-through: schema and session errors keep their
//! own codes when they surface in a response.

use std::fmt;

use crate::schema::SchemaError;
use crate::session::SessionError;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request line is not a valid request
    InvalidRequest,
    /// Operation name not recognised
    UnknownOperation,
    /// Form operation while on the landing page
    NoActiveForm,
    /// Path that matches no route
    UnknownRoute,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "FORM_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "FORM_UNKNOWN_OPERATION",
            ApiErrorCode::NoActiveForm => "FORM_NO_ACTIVE_FORM",
            ApiErrorCode::UnknownRoute => "FORM_UNKNOWN_ROUTE",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with the originating code preserved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: String,
    message: String,
}

impl ApiError {
    fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code().to_string(),
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::InvalidRequest, reason)
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::UnknownOperation,
            format!("Unknown operation: {}", op.into()),
        )
    }

    /// Create a no-active-form error
    pub fn no_active_form() -> Self {
        Self::new(
            ApiErrorCode::NoActiveForm,
            "No form is mounted. Navigate to a form route first.",
        )
    }

    /// Create an unknown route error
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::UnknownRoute,
            format!("Unknown route: {}", path.into()),
        )
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
