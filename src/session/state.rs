//! Draft record, touched set and latest validation result

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::observability::Logger;
use crate::schema::{FieldErrors, FieldValue, FormSchema, Record, ValidationResult, Validator};

use super::errors::{SessionError, SessionResult};

/// Unique session identifier, used to correlate log lines
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(format!("form:{}", Uuid::new_v4()))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the form has been edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No field touched yet
    Pristine,
    /// At least one field touched
    Dirty,
}

/// State of one mounted form.
#[derive(Debug, Clone)]
pub struct FormSession<'s> {
    id: SessionId,
    validator: Validator<'s>,
    draft: Record,
    touched: BTreeSet<String>,
    last: ValidationResult,
}

impl<'s> FormSession<'s> {
    /// Mounts a form: every field empty, nothing touched.
    pub fn new(schema: &'s FormSchema) -> Self {
        let validator = Validator::new(schema);
        let draft = Record::empty_for(schema);
        let last = validator.validate(&draft);
        let id = SessionId::new();

        Logger::trace(
            "SESSION_START",
            &[("schema", schema.name.as_str()), ("session", id.0.as_str())],
        );

        Self {
            id,
            validator,
            draft,
            touched: BTreeSet::new(),
            last,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn schema(&self) -> &'s FormSchema {
        self.validator.schema()
    }

    /// Stores a new value, marks the field touched and re-validates.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> SessionResult<()> {
        if !self.schema().contains(name) {
            return Err(SessionError::UnknownField {
                field: name.to_string(),
                schema: self.schema().name.clone(),
            });
        }

        self.draft.set(name, value);
        self.touched.insert(name.to_string());
        self.last = self.validator.validate(&self.draft);

        Logger::trace(
            "FIELD_UPDATED",
            &[
                ("field", name),
                ("session", self.id.0.as_str()),
                ("valid", if self.last.is_valid() { "true" } else { "false" }),
            ],
        );
        Ok(())
    }

    /// Errors of the last validation, for every field
    pub fn current_errors(&self) -> FieldErrors {
        self.last.errors().cloned().unwrap_or_default()
    }

    /// Errors of touched fields only
    pub fn visible_errors(&self) -> FieldErrors {
        match self.last.errors() {
            Some(errors) => errors.filtered(|field| self.touched.contains(field)),
            None => FieldErrors::new(),
        }
    }

    /// Current message for one field
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.last.errors().and_then(|errors| errors.get(name))
    }

    /// Valid and touched. A pristine form is never submittable.
    pub fn is_submittable(&self) -> bool {
        self.last.is_valid() && !self.touched.is_empty()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.touched.is_empty() {
            SessionPhase::Pristine
        } else {
            SessionPhase::Dirty
        }
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn touched(&self) -> impl Iterator<Item = &str> {
        self.touched.iter().map(String::as_str)
    }

    pub fn last_result(&self) -> &ValidationResult {
        &self.last
    }

    /// Replaces the draft with the declared fields of `inputs`, marks every
    /// field touched and validates once. Undeclared keys are skipped.
    pub(crate) fn load_draft(&mut self, inputs: &Record) {
        let schema = self.schema();
        for field in &schema.fields {
            self.draft
                .set(field.name.as_str(), inputs.value_of(field).into_owned());
            self.touched.insert(field.name.clone());
        }
        self.last = self.validator.validate(&self.draft);

        Logger::trace(
            "DRAFT_LOADED",
            &[
                ("session", self.id.0.as_str()),
                ("valid", if self.last.is_valid() { "true" } else { "false" }),
            ],
        );
    }

    /// Validates the draft again and adopts the fresh result.
    pub(crate) fn revalidate(&mut self) -> &ValidationResult {
        self.last = self.validator.validate(&self.draft);
        &self.last
    }

    #[cfg(test)]
    pub(crate) fn force_result(&mut self, result: ValidationResult) {
        self.last = result;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{fields, SchemaVariant};

    fn fill_valid(session: &mut FormSession<'_>) {
        session.set_field(fields::NAME, "Ann").unwrap();
        session.set_field(fields::EMAIL, "ann@x.com").unwrap();
        session.set_field(fields::AGE, "30").unwrap();
        session.set_field(fields::PASSWORD1, "Abcdef1!").unwrap();
        session.set_field(fields::PASSWORD2, "Abcdef1!").unwrap();
        session.set_field(fields::GENDER, "female").unwrap();
        session.set_field(fields::COUNTRY, "Canada").unwrap();
        session.set_field(fields::TERMS, true).unwrap();
    }

    #[test]
    fn test_load_draft_takes_declared_fields() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut session = FormSession::new(&schema);
        let inputs = Record::new()
            .with(fields::NAME, "ann")
            .with("nickname", "annie");

        session.load_draft(&inputs);

        assert_eq!(session.touched().count(), schema.fields.len());
        assert!(session.draft().get("nickname").is_none());
        assert_eq!(session.draft().text(fields::EMAIL), "");
        assert_eq!(
            session.field_error(fields::NAME),
            Some("Name must start with a capital letter")
        );
        assert_eq!(session.visible_errors().len(), schema.fields.len());
    }

    #[test]
    fn test_new_session_is_pristine() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let session = FormSession::new(&schema);

        assert_eq!(session.phase(), SessionPhase::Pristine);
        assert!(!session.is_submittable());
        assert!(!session.last_result().is_valid());
        assert_eq!(session.current_errors().len(), schema.fields.len());
        assert!(session.visible_errors().is_empty());
    }

    #[test]
    fn test_first_edit_makes_dirty() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut session = FormSession::new(&schema);

        session.set_field(fields::NAME, "ann").unwrap();
        assert_eq!(session.phase(), SessionPhase::Dirty);
        assert!(session.is_touched(fields::NAME));

        let visible = session.visible_errors();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.get(fields::NAME), Some("Name must start with a capital letter"));
    }

    #[test]
    fn test_complete_form_is_submittable() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut session = FormSession::new(&schema);
        fill_valid(&mut session);

        assert!(session.is_submittable());
        assert!(session.current_errors().is_empty());
    }

    #[test]
    fn test_password_change_invalidates_confirmation() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut session = FormSession::new(&schema);
        fill_valid(&mut session);
        assert!(session.field_error(fields::PASSWORD2).is_none());

        session.set_field(fields::PASSWORD1, "Zyxwvu9$").unwrap();
        assert_eq!(session.field_error(fields::PASSWORD2), Some("Passwords must match"));
        assert!(!session.is_submittable());
    }

    #[test]
    fn test_unknown_field_changes_nothing() {
        let schema = SchemaVariant::NoCountry.schema().unwrap();
        let mut session = FormSession::new(&schema);

        let err = session.set_field(fields::COUNTRY, "Canada").unwrap_err();
        assert_eq!(err.code(), "FORM_UNKNOWN_FIELD");
        assert_eq!(session.phase(), SessionPhase::Pristine);
        assert!(session.draft().get(fields::COUNTRY).is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let a = FormSession::new(&schema);
        let b = FormSession::new(&schema);
        assert_ne!(a.id(), b.id());
        assert!(a.id().to_string().starts_with("form:"));
    }
}
