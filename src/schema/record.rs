//! Raw and normalized records
//!
//! A `Record` holds what the inputs currently contain, keyed by field name.
//! A `NormalizedRecord` is what the validator hands out once every rule
//! passes: exactly one value per declared field, numbers as integers.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{parse_integer, FieldDef, FieldKind, FormSchema};

/// Raw input value: text box contents or checkbox state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Empty value for a field of the given kind
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Text | FieldKind::Number => FieldValue::Text(String::new()),
        }
    }

    /// Reads the value as text; flags read as "true" / "false"
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Flag(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Reads the value as a flag; only the text "true" reads as set
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(s) => s == "true",
        }
    }

    /// Empty or whitespace-only text. Flags are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }

    fn from_json(field: &str, value: &Value) -> SchemaResult<Self> {
        match value {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Bool(b) => Ok(FieldValue::Flag(*b)),
            Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
            Value::Null => Ok(FieldValue::Text(String::new())),
            Value::Array(_) | Value::Object(_) => Err(SchemaError::MalformedRecord(format!(
                "field '{}' must be a string, number, boolean or null",
                field
            ))),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Candidate field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every declared field set to its empty value
    pub fn empty_for(schema: &FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.clone(), FieldValue::empty(f.kind)))
            .collect();
        Self { values }
    }

    /// Builds a record from a JSON object.
    ///
    /// Numbers become their decimal text, `null` becomes empty text.
    pub fn from_json(value: &Value) -> SchemaResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::MalformedRecord("record must be a JSON object".into()))?;

        let mut record = Record::new();
        for (name, raw) in obj {
            record.set(name.clone(), FieldValue::from_json(name, raw)?);
        }
        Ok(record)
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a field; absent fields read as empty
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        self.values
            .get(name)
            .map(FieldValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// Value of a declared field, falling back to its empty value
    pub(crate) fn value_of(&self, field: &FieldDef) -> Cow<'_, FieldValue> {
        match self.values.get(&field.name) {
            Some(v) => Cow::Borrowed(v),
            None => Cow::Owned(FieldValue::empty(field.kind)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Accepted value after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    Integer(i64),
    Flag(bool),
    Text(String),
}

/// Record that passed every rule, one entry per declared field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedRecord {
    values: BTreeMap<String, NormalizedValue>,
}

impl NormalizedRecord {
    /// Initial store contents: empty texts, zero numbers, unset flags
    pub fn placeholder(schema: &FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| {
                let value = match f.kind {
                    FieldKind::Text => NormalizedValue::Text(String::new()),
                    FieldKind::Number => NormalizedValue::Integer(0),
                    FieldKind::Flag => NormalizedValue::Flag(false),
                };
                (f.name.clone(), value)
            })
            .collect();
        Self { values }
    }

    /// Normalizes a record that passed validation. Fails with the first
    /// number field whose text is not an exact integer.
    pub(crate) fn from_record<'s>(
        schema: &'s FormSchema,
        record: &Record,
    ) -> Result<Self, &'s FieldDef> {
        let values = schema
            .fields
            .iter()
            .map(|f| {
                let raw = record.value_of(f);
                let value = match f.kind {
                    FieldKind::Text => NormalizedValue::Text(raw.as_text().into_owned()),
                    FieldKind::Number => {
                        NormalizedValue::Integer(parse_integer(&raw.as_text()).ok_or(f)?)
                    }
                    FieldKind::Flag => NormalizedValue::Flag(raw.as_flag()),
                };
                Ok((f.name.clone(), value))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&NormalizedValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(NormalizedValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(NormalizedValue::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(NormalizedValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
