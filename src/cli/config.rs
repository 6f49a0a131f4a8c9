//! Configuration file handling
//!
//! ```json
//! {"variant": "no_country", "schema_file": "signup.json", "log_level": "warn"}
//! ```
//!
//! Every key is optional. A relative `schema_file` is resolved against the
//! directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::schema::{FormSchema, SchemaLoader, SchemaVariant};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Built-in rule set, used when no `schema_file` is given
    #[serde(default)]
    pub variant: SchemaVariant,

    /// JSON rule set definition overriding `variant`
    #[serde(default)]
    pub schema_file: Option<PathBuf>,

    /// Minimum severity written to stderr
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_log_level() -> Severity {
    Severity::Info
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: SchemaVariant::default(),
            schema_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        if let (Some(file), Some(dir)) = (&config.schema_file, path.parent()) {
            if file.is_relative() {
                config.schema_file = Some(dir.join(file));
            }
        }

        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise, and applies the log level.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };

        Logger::set_min_severity(config.log_level);

        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("source", &source), ("log_level", config.log_level.as_str())],
        );

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(file) = &self.schema_file {
            if file.as_os_str().is_empty() {
                return Err(CliError::config_error("schema_file must not be empty"));
            }
        }

        Ok(())
    }

    /// Builds the active rule set
    pub fn load_schema(&self) -> CliResult<FormSchema> {
        let (schema, source) = match &self.schema_file {
            Some(file) => (SchemaLoader::load_file(file)?, file.display().to_string()),
            None => (
                SchemaLoader::builtin(self.variant)?,
                format!("builtin:{}", self.variant),
            ),
        };

        log_event_with_fields(
            Event::SchemaLoaded,
            &[
                ("schema", &schema.name),
                ("source", &source),
                ("fields", &schema.fields.len().to_string()),
            ],
        );

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::fields;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: serde_json::Value) -> PathBuf {
        let path = dir.path().join("formgate.json");
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({}));

        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.variant, SchemaVariant::Standard);
        assert_eq!(config.log_level, Severity::Info);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"varient": "standard"}));

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code(), "FORM_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_config_rejects_empty_schema_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"schema_file": ""}));

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "FORM_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_variant_selects_builtin() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, json!({"variant": "no_country", "log_level": "warn"}));

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log_level, Severity::Warn);

        let schema = config.load_schema().unwrap();
        assert!(!schema.contains(fields::COUNTRY));
        assert!(schema.contains(fields::TERMS));
    }

    #[test]
    fn test_relative_schema_file() {
        let dir = TempDir::new().unwrap();
        let schema = SchemaVariant::NoCountry.schema().unwrap();
        fs::write(
            dir.path().join("rules.json"),
            SchemaLoader::to_json(&schema).unwrap(),
        )
        .unwrap();
        let path = write_config(&dir, json!({"schema_file": "rules.json"}));

        let config = Config::load(&path).unwrap();
        assert_eq!(config.schema_file, Some(dir.path().join("rules.json")));
        assert_eq!(config.load_schema().unwrap(), schema);
    }

    #[test]
    fn test_broken_schema_file_surfaces_schema_code() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rules.json"), r#"{"name":"x","fields":[]}"#).unwrap();
        let path = write_config(&dir, json!({"schema_file": "rules.json"}));

        let err = Config::load(&path).unwrap().load_schema().unwrap_err();
        assert_eq!(err.code(), "FORM_SCHEMA_NO_FIELDS");
    }
}
