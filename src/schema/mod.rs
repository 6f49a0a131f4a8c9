//! Field rule set and validator for formgate
//!
//! Both form-entry strategies validate against the same `FormSchema`.
//!
//! # Design Principles
//!
//! - One ordered rule list per field, one fixed message per rule
//! - First failing rule of a field wins, every field is still evaluated
//! - Validation never faults: malformed input is a field error
//! - Deterministic and side-effect free

mod builtin;
mod errors;
mod loader;
mod record;
mod types;
mod validator;

pub use builtin::{fields, SchemaVariant};
pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use record::{FieldValue, NormalizedRecord, NormalizedValue, Record};
pub use types::{Check, FieldDef, FieldKind, FieldRule, FormSchema, Pattern};
pub use validator::{FieldErrors, ValidationResult, Validator};
