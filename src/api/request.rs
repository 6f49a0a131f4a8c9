//! API request types
//!
//! One JSON object per request, selected by `op`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::navigation::Route;
use crate::schema::{FieldValue, Record};

use super::errors::{ApiError, ApiResult};

/// Unified request envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Go to a page, mounting its form if it has one
    Navigate(Route),
    /// One edit of one field in the mounted form
    Input { field: String, value: FieldValue },
    /// Press submit on the mounted form
    Submit,
    /// Read the result store
    Show,
    /// Validate a record without any session
    Validate(Record),
    /// Country suggestions
    Countries { query: String },
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    route: Option<String>,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    record: Option<Value>,
    #[serde(default)]
    query: Option<String>,
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "navigate" => {
                let path = raw
                    .route
                    .ok_or_else(|| ApiError::invalid_request("Missing route"))?;
                let route = Route::from_path(&path).ok_or_else(|| ApiError::unknown_route(path))?;
                Ok(Request::Navigate(route))
            }
            "input" => {
                let field = raw
                    .field
                    .ok_or_else(|| ApiError::invalid_request("Missing field"))?;
                let value = match raw.value {
                    None | Some(Value::Null) => FieldValue::Text(String::new()),
                    Some(Value::Bool(b)) => FieldValue::Flag(b),
                    Some(Value::String(s)) => FieldValue::Text(s),
                    Some(Value::Number(n)) => FieldValue::Text(n.to_string()),
                    Some(_) => {
                        return Err(ApiError::invalid_request(
                            "value must be a string, number, boolean or null",
                        ))
                    }
                };
                Ok(Request::Input { field, value })
            }
            "submit" => Ok(Request::Submit),
            "show" => Ok(Request::Show),
            "validate" => {
                let record = raw
                    .record
                    .ok_or_else(|| ApiError::invalid_request("Missing record"))?;
                Ok(Request::Validate(Record::from_json(&record)?))
            }
            "countries" => Ok(Request::Countries {
                query: raw.query.unwrap_or_default(),
            }),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
