//! API response types
//!
//! `{"status":"ok","data":...}` or
//! `{"status":"error","code":...,"message":...}`, one per line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

const FALLBACK_ERROR: &str =
    r#"{"status":"error","code":"FORM_INVALID_REQUEST","message":"response serialization failed"}"#;

/// Success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create from an API error
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a success response
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Convert to a single-line JSON string
    pub fn to_json(&self) -> String {
        let encoded = match self {
            Response::Success(r) => serde_json::to_string(r),
            Response::Error(r) => serde_json::to_string(r),
        };
        encoded.unwrap_or_else(|_| FALLBACK_ERROR.to_string())
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Payload of a success response
    pub fn data(&self) -> Option<&Value> {
        match self {
            Response::Success(r) => Some(&r.data),
            Response::Error(_) => None,
        }
    }
}
