//! Rule set type definitions
//!
//! Supported checks:
//! - required: text is not blank
//! - pattern: text matches a regular expression
//! - number / positive / integer: text parses as a finite number, > 0, whole
//! - min_length: text has at least `min` characters
//! - matches: text equals another field's text
//! - accepted: flag is exactly `true`

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Compiled regular expression, serialized as its source text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern
    pub fn new(source: &str) -> SchemaResult<Self> {
        Regex::new(source)
            .map(Pattern)
            .map_err(|e| SchemaError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the source text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl TryFrom<String> for Pattern {
    type Error = SchemaError;

    fn try_from(source: String) -> SchemaResult<Self> {
        Pattern::new(&source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.as_str().to_string()
    }
}

/// A single constraint kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    /// Text is not empty or whitespace-only
    Required,
    /// Text matches the pattern somewhere
    Pattern { pattern: Pattern },
    /// Text parses as a finite number
    Number,
    /// Parsed number is greater than zero
    Positive,
    /// Parsed number has no fractional part
    Integer,
    /// Text has at least `min` characters
    MinLength { min: usize },
    /// Text equals the text of another field
    Matches { field: String },
    /// Flag is set
    Accepted,
}

impl Check {
    /// Build a pattern check
    pub fn pattern(source: &str) -> SchemaResult<Self> {
        Ok(Check::Pattern {
            pattern: Pattern::new(source)?,
        })
    }

    /// Build a cross-field equality check
    pub fn matches(field: impl Into<String>) -> Self {
        Check::Matches {
            field: field.into(),
        }
    }
}

/// A check paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    #[serde(flatten)]
    pub check: Check,
    pub message: String,
}

/// How a field's accepted value is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Kept verbatim as a string
    Text,
    /// Entered as text, stored as an integer
    Number,
    /// Checkbox state
    Flag,
}

/// A declared field and its ordered rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rules: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    /// Append a rule; rules run in the order they were added
    pub fn rule(mut self, check: Check, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule {
            check,
            message: message.into(),
        });
        self
    }

    fn has_check(&self, wanted: &Check) -> bool {
        self.rules.iter().any(|r| &r.check == wanted)
    }
}

/// Complete rule set for one form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Schema name, used in logs
    pub name: String,
    /// Fields in evaluation order
    pub fields: Vec<FieldDef>,
}

impl FormSchema {
    /// Create a schema and check its structure
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> SchemaResult<Self> {
        let schema = Self {
            name: name.into(),
            fields,
        };
        schema.validate_structure()?;
        Ok(schema)
    }

    /// Looks up a declared field
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validates the rule set itself (not a record)
    pub fn validate_structure(&self) -> SchemaResult<()> {
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields {
                schema: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    schema: self.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    field: field.name.clone(),
                });
            }
        }

        for field in &self.fields {
            for rule in &field.rules {
                if let Check::Matches { field: target } = &rule.check {
                    if target == &field.name {
                        return Err(SchemaError::SelfMatch {
                            field: field.name.clone(),
                        });
                    }
                    if !self.contains(target) {
                        return Err(SchemaError::UnknownMatchTarget {
                            field: field.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }

            // Number fields normalize to i64, so a passing value must be whole
            if field.kind == FieldKind::Number
                && !(field.has_check(&Check::Number) && field.has_check(&Check::Integer))
            {
                return Err(SchemaError::IncompleteNumberField {
                    field: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Parses entered text as a finite number.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Largest magnitude at which every whole `f64` is exact.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parses entered text as a whole number that converts to `i64` exactly.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    parse_number(text)
        .filter(|n| n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER)
        .map(|n| n as i64)
}
