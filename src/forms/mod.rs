//! Form-entry strategies
//!
//! Two ways of getting input into a record, compared against one rule set:
//! - `BoundForm`: every keystroke goes through the session and is
//!   validated immediately, submit is enabled only when submittable
//! - `UncontrolledForm`: inputs are read from their references only when
//!   the user presses submit
//!
//! Both end in the same place: a `FormSession` handed to `gate::submit`.

mod bound;
mod uncontrolled;

pub use bound::BoundForm;
pub use uncontrolled::UncontrolledForm;

use crate::gate::Outcome;
use crate::navigation::{Navigator, Route};
use crate::schema::{FieldErrors, FieldValue, FormSchema};
use crate::session::{FormSession, SessionResult};
use crate::store::ResultStore;

/// A mounted form, whatever its input strategy.
pub trait FormStrategy {
    /// Page this form lives on
    fn route(&self) -> Route;

    /// One user edit of one field
    fn input(&mut self, field: &str, value: FieldValue) -> SessionResult<()>;

    /// Messages the page currently shows
    fn visible_errors(&self) -> FieldErrors;

    /// Whether the submit button is enabled. Advisory only.
    fn can_submit(&self) -> bool;

    /// Submit through the gate
    fn submit(&mut self, store: &mut dyn ResultStore) -> Outcome;

    /// Underlying session state
    fn session(&self) -> &FormSession<'_>;
}

/// Mounts the form for a route; the landing page has none.
pub fn mount<'s>(route: Route, schema: &'s FormSchema) -> Option<Box<dyn FormStrategy + 's>> {
    match route {
        Route::Main => None,
        Route::HookForm => Some(Box::new(BoundForm::new(schema))),
        Route::UncontrolledForm => Some(Box::new(UncontrolledForm::new(schema))),
    }
}

/// Submits a form and, once accepted, returns to the landing page.
pub fn submit_and_navigate<F, N>(
    form: &mut F,
    store: &mut dyn ResultStore,
    navigator: &mut N,
) -> Outcome
where
    F: FormStrategy + ?Sized,
    N: Navigator + ?Sized,
{
    let outcome = form.submit(store);
    if outcome.is_accepted() {
        navigator.navigate(Route::Main);
    }
    outcome
}
