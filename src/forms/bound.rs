//! Form with library-managed field bindings
//!
//! Validation runs on every change. Only touched fields show their
//! message, and the submit button stays disabled until the session is
//! submittable.

use crate::gate::{self, Outcome};
use crate::navigation::Route;
use crate::schema::{FieldErrors, FieldValue, FormSchema};
use crate::session::{FormSession, SessionResult};
use crate::store::ResultStore;

use super::FormStrategy;

pub struct BoundForm<'s> {
    session: FormSession<'s>,
}

impl<'s> BoundForm<'s> {
    pub fn new(schema: &'s FormSchema) -> Self {
        Self {
            session: FormSession::new(schema),
        }
    }
}

impl<'s> FormStrategy for BoundForm<'s> {
    fn route(&self) -> Route {
        Route::HookForm
    }

    fn input(&mut self, field: &str, value: FieldValue) -> SessionResult<()> {
        self.session.set_field(field, value)
    }

    fn visible_errors(&self) -> FieldErrors {
        self.session.visible_errors()
    }

    fn can_submit(&self) -> bool {
        self.session.is_submittable()
    }

    fn submit(&mut self, store: &mut dyn ResultStore) -> Outcome {
        gate::submit(&mut self.session, store)
    }

    fn session(&self) -> &FormSession<'_> {
        &self.session
    }
}
