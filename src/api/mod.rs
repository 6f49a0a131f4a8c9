//! API layer for formgate
//!
//! Drives forms, the gate and the result store from JSON requests, the
//! way a page would drive them from user events.
//!
//! # Supported Operations
//!
//! - navigate: go to `/`, `/form_uncontrolled_components` or `/react_hook_form`
//! - input: edit one field of the mounted form
//! - submit: press submit on the mounted form
//! - show: read the result store
//! - validate: stateless validation of a whole record
//! - countries: autocomplete suggestions

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::AppHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};
