//! Form read through manual input references
//!
//! Typing only changes what the inputs hold. Nothing is validated and no
//! message is shown until submit, which reads every input into the
//! session and hands it to the gate. The submit button is always enabled.

use crate::gate::{self, Outcome};
use crate::navigation::Route;
use crate::schema::{FieldErrors, FieldValue, FormSchema, Record};
use crate::session::{FormSession, SessionError, SessionResult};
use crate::store::ResultStore;

use super::FormStrategy;

pub struct UncontrolledForm<'s> {
    /// What each input element currently holds
    inputs: Record,
    session: FormSession<'s>,
    attempted: bool,
}

impl<'s> UncontrolledForm<'s> {
    pub fn new(schema: &'s FormSchema) -> Self {
        Self {
            inputs: Record::empty_for(schema),
            session: FormSession::new(schema),
            attempted: false,
        }
    }

    /// Raw contents of the inputs, as the next submit will read them
    pub fn inputs(&self) -> &Record {
        &self.inputs
    }
}

impl<'s> FormStrategy for UncontrolledForm<'s> {
    fn route(&self) -> Route {
        Route::UncontrolledForm
    }

    fn input(&mut self, field: &str, value: FieldValue) -> SessionResult<()> {
        let schema = self.session.schema();
        if !schema.contains(field) {
            return Err(SessionError::UnknownField {
                field: field.to_string(),
                schema: schema.name.clone(),
            });
        }
        self.inputs.set(field, value);
        Ok(())
    }

    fn visible_errors(&self) -> FieldErrors {
        if self.attempted {
            self.session.current_errors()
        } else {
            FieldErrors::new()
        }
    }

    fn can_submit(&self) -> bool {
        true
    }

    fn submit(&mut self, store: &mut dyn ResultStore) -> Outcome {
        self.attempted = true;
        self.session.load_draft(&self.inputs);
        gate::submit(&mut self.session, store)
    }

    fn session(&self) -> &FormSession<'_> {
        &self.session
    }
}
