//! Record validator
//!
//! Validation semantics:
//! - Every declared field is evaluated, in declaration order
//! - Within a field, rules run in order and the first failure is recorded
//! - A failure in one field never stops evaluation of the next
//! - Cross-field checks read the other field from the same record
//! - Undeclared keys are ignored
//!
//! The validator has no state of its own: the same record always yields
//! the same result.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::record::{FieldValue, NormalizedRecord, Record};
use super::types::{parse_integer, parse_number, Check, FieldDef, FormSchema};

/// First failing message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message; a field keeps the first message it was given
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keeps only the fields accepted by `keep`
    pub fn filtered<F>(&self, mut keep: F) -> FieldErrors
    where
        F: FnMut(&str) -> bool,
    {
        FieldErrors(
            self.0
                .iter()
                .filter(|(k, _)| keep(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of validating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed
    Valid(NormalizedRecord),
    /// At least one field failed
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn record(&self) -> Option<&NormalizedRecord> {
        match self {
            ValidationResult::Valid(record) => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ValidationResult::Valid(record) => json!({ "valid": true, "record": record }),
            ValidationResult::Invalid(errors) => json!({ "valid": false, "errors": errors }),
        }
    }
}

/// Evaluates records against a borrowed rule set.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a FormSchema,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a FormSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'a FormSchema {
        self.schema
    }

    /// Validates a record and collects the first failure of every field.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut errors = FieldErrors::new();

        for field in &self.schema.fields {
            let value = record.value_of(field);
            let failed = field
                .rules
                .iter()
                .find(|rule| !passes(&rule.check, &value, record));

            if let Some(rule) = failed {
                errors.insert(field.name.as_str(), rule.message.as_str());
            }
        }

        if !errors.is_empty() {
            return ValidationResult::Invalid(errors);
        }

        match NormalizedRecord::from_record(self.schema, record) {
            Ok(normalized) => ValidationResult::Valid(normalized),
            Err(field) => {
                errors.insert(field.name.as_str(), integer_message(field));
                ValidationResult::Invalid(errors)
            }
        }
    }

    /// First failing message for a single field, if any.
    ///
    /// Cross-field checks still read the rest of `record`.
    pub fn check_field(&self, record: &Record, field_name: &str) -> Option<&'a str> {
        let field = self.schema.field(field_name)?;
        let value = record.value_of(field);
        field
            .rules
            .iter()
            .find(|rule| !passes(&rule.check, &value, record))
            .map(|rule| rule.message.as_str())
    }
}

/// Message reported when a number field cannot be stored as an integer.
fn integer_message(field: &FieldDef) -> &str {
    field
        .rules
        .iter()
        .find(|rule| rule.check == Check::Integer)
        .map_or("Invalid number", |rule| rule.message.as_str())
}

fn passes(check: &Check, value: &FieldValue, record: &Record) -> bool {
    match check {
        Check::Required => !value.is_blank(),
        Check::Pattern { pattern } => pattern.is_match(&value.as_text()),
        Check::Number => parse_number(&value.as_text()).is_some(),
        Check::Positive => parse_number(&value.as_text()).map_or(false, |n| n > 0.0),
        Check::Integer => parse_integer(&value.as_text()).is_some(),
        Check::MinLength { min } => value.as_text().chars().count() >= *min,
        Check::Matches { field } => value.as_text() == record.text(field),
        Check::Accepted => value.as_flag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{fields, FieldDef, SchemaVariant};

    fn valid_record() -> Record {
        Record::new()
            .with(fields::NAME, "Ann")
            .with(fields::EMAIL, "ann@x.com")
            .with(fields::AGE, "30")
            .with(fields::PASSWORD1, "Abcdef1!")
            .with(fields::PASSWORD2, "Abcdef1!")
            .with(fields::GENDER, "female")
            .with(fields::COUNTRY, "Canada")
            .with(fields::TERMS, true)
    }

    fn standard() -> FormSchema {
        SchemaVariant::Standard.schema().unwrap()
    }

    #[test]
    fn test_valid_record_normalizes() {
        let schema = standard();
        let result = Validator::new(&schema).validate(&valid_record());

        let record = result.record().expect("record should be valid");
        assert_eq!(record.integer(fields::AGE), Some(30));
        assert_eq!(record.flag(fields::TERMS), Some(true));
        assert_eq!(record.text(fields::NAME), Some("Ann"));
        assert_eq!(record.len(), schema.fields.len());
    }

    #[test]
    fn test_lowercase_name() {
        let schema = standard();
        let record = valid_record().with(fields::NAME, "ann");
        let result = Validator::new(&schema).validate(&record);

        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(fields::NAME), Some("Name must start with a capital letter"));
    }

    #[test]
    fn test_empty_record_reports_every_field_once() {
        let schema = standard();
        let result = Validator::new(&schema).validate(&Record::empty_for(&schema));

        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), schema.fields.len());
        assert_eq!(errors.get(fields::NAME), Some("Name is required"));
        assert_eq!(errors.get(fields::AGE), Some("Age is required"));
        assert_eq!(errors.get(fields::PASSWORD2), Some("Repeat your password"));
        assert_eq!(errors.get(fields::TERMS), Some("You must accept the Terms and Conditions"));
    }

    #[test]
    fn test_age_rule_order() {
        let schema = standard();
        let validator = Validator::new(&schema);
        let cases = [
            ("abc", "Age must be a number"),
            ("-3", "Age must be a positive number"),
            ("0", "Age must be a positive number"),
            ("2.5", "Age must be an integer"),
            ("   ", "Age is required"),
        ];
        for (age, message) in cases {
            let record = valid_record().with(fields::AGE, age);
            assert_eq!(validator.check_field(&record, fields::AGE), Some(message), "age {:?}", age);
        }
    }

    #[test]
    fn test_whole_float_age_normalizes() {
        let schema = standard();
        let record = valid_record().with(fields::AGE, "42.0");
        let result = Validator::new(&schema).validate(&record);
        assert_eq!(result.record().unwrap().integer(fields::AGE), Some(42));
    }

    #[test]
    fn test_password_min_length_first() {
        let schema = standard();
        let record = valid_record()
            .with(fields::PASSWORD1, "short1!")
            .with(fields::PASSWORD2, "short1!");
        let errors = Validator::new(&schema).validate(&record).errors().cloned().unwrap();
        assert_eq!(
            errors.get(fields::PASSWORD1),
            Some("Weak password: password must be at least 8 characters long")
        );
        assert!(!errors.contains(fields::PASSWORD2));
    }

    #[test]
    fn test_password_strength_rules() {
        let schema = standard();
        let validator = Validator::new(&schema);
        let cases = [
            ("abcdefg1!", "Weak password: password must contain at least one uppercase letter"),
            ("ABCDEFG1!", "Weak password: password must contain at least one lowercase letter"),
            ("Abcdefgh!", "Weak password: password must contain at least one number"),
            (
                "Abcdefg12",
                "Weak password: password must contain at least one special character @$!%*?&#",
            ),
        ];
        for (password, message) in cases {
            let record = valid_record().with(fields::PASSWORD1, password);
            assert_eq!(validator.check_field(&record, fields::PASSWORD1), Some(message));
        }
    }

    #[test]
    fn test_password_confirmation() {
        let schema = standard();
        let record = valid_record().with(fields::PASSWORD2, "Abcdef1?");
        let errors = Validator::new(&schema).validate(&record).errors().cloned().unwrap();
        assert_eq!(errors.get(fields::PASSWORD2), Some("Passwords must match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_terms_must_be_true() {
        let schema = standard();
        let record = valid_record().with(fields::TERMS, false);
        let errors = Validator::new(&schema).validate(&record).errors().cloned().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(fields::TERMS));

        let record = valid_record().with(fields::TERMS, "true");
        assert!(Validator::new(&schema).validate(&record).is_valid());
    }

    #[test]
    fn test_undeclared_keys_ignored() {
        let schema = SchemaVariant::NoCountry.schema().unwrap();
        let result = Validator::new(&schema).validate(&valid_record().with("nickname", "annie"));
        let record = result.record().unwrap();
        assert!(record.get(fields::COUNTRY).is_none());
        assert!(record.get("nickname").is_none());
    }

    #[test]
    fn test_custom_rule_set() {
        let schema = FormSchema::new(
            "newsletter",
            vec![FieldDef::text("email").rule(Check::Required, "Email is required")],
        )
        .unwrap();
        let result = Validator::new(&schema).validate(&Record::new());
        assert_eq!(result.errors().unwrap().get("email"), Some("Email is required"));
    }

    #[test]
    fn test_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "first");
        errors.insert("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_result_json() {
        let schema = standard();
        let json = Validator::new(&schema).validate(&valid_record()).to_json();
        assert_eq!(json["valid"], true);
        assert_eq!(json["record"]["age"], 30);

        let json = Validator::new(&schema)
            .validate(&valid_record().with(fields::GENDER, ""))
            .to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"]["gender"], "Gender is required");
    }
}
