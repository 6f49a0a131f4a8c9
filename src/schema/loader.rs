//! Schema loader
//!
//! A rule set comes either from a built-in variant or from a JSON
//! definition file with the same shape `FormSchema` serializes to:
//!
//! ```json
//! {"name": "signup", "fields": [
//!   {"name": "name", "kind": "text", "rules": [
//!     {"check": "required", "message": "Name is required"}]}]}
//! ```

use std::fs;
use std::path::Path;

use super::builtin::SchemaVariant;
use super::errors::{SchemaError, SchemaResult};
use super::types::FormSchema;

/// Resolves rule sets from built-ins or definition files.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Returns a built-in rule set.
    pub fn builtin(variant: SchemaVariant) -> SchemaResult<FormSchema> {
        variant.schema()
    }

    /// Loads a rule set from a JSON definition file.
    pub fn load_file(path: &Path) -> SchemaResult<FormSchema> {
        let content = fs::read_to_string(path).map_err(|e| SchemaError::MalformedFile {
            path: path.display().to_string(),
            reason: format!("Failed to read file: {}", e),
        })?;

        Self::from_json(&content, &path.display().to_string())
    }

    /// Parses a rule set definition. `origin` names the source in errors.
    pub fn from_json(content: &str, origin: &str) -> SchemaResult<FormSchema> {
        let schema: FormSchema =
            serde_json::from_str(content).map_err(|e| SchemaError::MalformedFile {
                path: origin.to_string(),
                reason: format!("Invalid JSON: {}", e),
            })?;

        schema.validate_structure()?;
        Ok(schema)
    }

    /// Renders a rule set as pretty JSON, loadable by `from_json`.
    pub fn to_json(schema: &FormSchema) -> SchemaResult<String> {
        serde_json::to_string_pretty(schema).map_err(|e| SchemaError::MalformedFile {
            path: schema.name.clone(),
            reason: format!("Failed to serialize schema: {}", e),
        })
    }
}
