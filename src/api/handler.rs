//! API handler for formgate
//!
//! Owns the result store, the navigator and at most one mounted form.
//! Requests are handled one at a time, in arrival order.

use serde_json::{json, Value};

use crate::countries::CountryList;
use crate::forms::{self, FormStrategy};
use crate::navigation::{Navigator, Route};
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{FieldValue, FormSchema, Validator};
use crate::store::ResultStore;

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;

/// Request handler over one application run
pub struct AppHandler<'s, S, N> {
    schema: &'s FormSchema,
    store: S,
    navigator: N,
    form: Option<Box<dyn FormStrategy + 's>>,
    countries: CountryList,
}

impl<'s, S, N> AppHandler<'s, S, N>
where
    S: ResultStore,
    N: Navigator,
{
    /// Create a handler sitting on the navigator's current page
    pub fn new(schema: &'s FormSchema, store: S, navigator: N) -> Self {
        let form = forms::mount(navigator.current(), schema);
        Self {
            schema,
            store,
            navigator,
            form,
            countries: CountryList::default(),
        }
    }

    /// Replace the country suggestions
    pub fn with_countries(mut self, countries: CountryList) -> Self {
        self.countries = countries;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The mounted form, if the current page has one
    pub fn active_form(&self) -> Option<&(dyn FormStrategy + 's)> {
        self.form.as_deref()
    }

    /// Handle a raw JSON request string
    pub fn handle(&mut self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                log_event_with_fields(Event::RequestRejected, &[("code", e.code())]);
                return Response::error(&e);
            }
        };

        match self.dispatch(request) {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Handle a parsed request
    pub fn dispatch(&mut self, request: Request) -> ApiResult<Value> {
        match request {
            Request::Navigate(route) => Ok(self.navigate(route)),
            Request::Input { field, value } => self.input(&field, value),
            Request::Submit => self.submit(),
            Request::Show => Ok(self.show()),
            Request::Validate(record) => {
                Ok(Validator::new(self.schema).validate(&record).to_json())
            }
            Request::Countries { query } => Ok(json!({
                "suggestions": self.countries.suggest(&query),
            })),
        }
    }

    /// Moves to `route`. Any mounted form is dropped with its draft.
    fn navigate(&mut self, route: Route) -> Value {
        if let Some(old) = self.form.take() {
            log_event_with_fields(
                Event::FormDiscarded,
                &[("route", old.route().path()), ("session", &old.session().id().0)],
            );
        }

        self.navigator.navigate(route);
        self.form = forms::mount(route, self.schema);

        if let Some(form) = &self.form {
            log_event_with_fields(
                Event::FormMounted,
                &[("route", route.path()), ("session", &form.session().id().0)],
            );
        }

        json!({ "route": route.path(), "title": route.title() })
    }

    fn input(&mut self, field: &str, value: FieldValue) -> ApiResult<Value> {
        let form = self.form.as_deref_mut().ok_or_else(ApiError::no_active_form)?;
        form.input(field, value)?;
        Ok(form_state(form))
    }

    fn submit(&mut self) -> ApiResult<Value> {
        let form = self.form.as_deref_mut().ok_or_else(ApiError::no_active_form)?;
        let outcome = forms::submit_and_navigate(form, &mut self.store, &mut self.navigator);

        if outcome.is_accepted() {
            self.form = None;
        }

        let mut data = outcome.to_json();
        data["route"] = json!(self.navigator.current().path());
        Ok(data)
    }

    fn show(&self) -> Value {
        json!({
            "record": self.store.read(),
            "route": self.navigator.current().path(),
        })
    }
}

fn form_state(form: &dyn FormStrategy) -> Value {
    json!({
        "route": form.route().path(),
        "errors": form.visible_errors(),
        "can_submit": form.can_submit(),
        "phase": form.session().phase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::History;
    use crate::schema::SchemaVariant;
    use crate::store::MemoryResultStore;

    fn handler(schema: &FormSchema) -> AppHandler<'_, MemoryResultStore, History> {
        AppHandler::new(schema, MemoryResultStore::new(schema), History::new())
    }

    fn data(resp: Response) -> Value {
        assert!(resp.is_success(), "unexpected error: {}", resp.to_json());
        resp.data().cloned().unwrap()
    }

    #[test]
    fn test_starts_on_landing_page() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut app = handler(&schema);
        assert!(app.active_form().is_none());

        let resp = app.handle(r#"{"op":"input","field":"name","value":"Ann"}"#);
        assert!(resp.to_json().contains("FORM_NO_ACTIVE_FORM"));
    }

    #[test]
    fn test_hook_form_flow() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut app = handler(&schema);

        data(app.handle(r#"{"op":"navigate","route":"/react_hook_form"}"#));
        let state = data(app.handle(r#"{"op":"input","field":"name","value":"ann"}"#));
        assert_eq!(state["errors"]["name"], "Name must start with a capital letter");
        assert_eq!(state["can_submit"], false);
        assert_eq!(state["phase"], "dirty");

        for line in [
            r#"{"op":"input","field":"name","value":"Ann"}"#,
            r#"{"op":"input","field":"email","value":"ann@x.com"}"#,
            r#"{"op":"input","field":"age","value":"30"}"#,
            r#"{"op":"input","field":"password1","value":"Abcdef1!"}"#,
            r#"{"op":"input","field":"password2","value":"Abcdef1!"}"#,
            r#"{"op":"input","field":"gender","value":"female"}"#,
            r#"{"op":"input","field":"country","value":"Canada"}"#,
            r#"{"op":"input","field":"terms","value":true}"#,
        ] {
            data(app.handle(line));
        }

        let outcome = data(app.handle(r#"{"op":"submit"}"#));
        assert_eq!(outcome["outcome"], "accepted");
        assert_eq!(outcome["route"], "/");
        assert!(app.active_form().is_none());

        let shown = data(app.handle(r#"{"op":"show"}"#));
        assert_eq!(shown["record"]["age"], 30);
        assert_eq!(shown["record"]["name"], "Ann");
        assert_eq!(app.store().revision(), 1);
    }

    #[test]
    fn test_navigation_discards_draft() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut app = handler(&schema);

        data(app.handle(r#"{"op":"navigate","route":"/react_hook_form"}"#));
        data(app.handle(r#"{"op":"input","field":"name","value":"Ann"}"#));
        data(app.handle(r#"{"op":"navigate","route":"/form_uncontrolled_components"}"#));

        let form = app.active_form().unwrap();
        assert_eq!(form.route(), Route::UncontrolledForm);
        assert!(form.session().draft().text("name").is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_form() {
        let schema = SchemaVariant::Standard.schema().unwrap();
        let mut app = handler(&schema);

        data(app.handle(r#"{"op":"navigate","route":"/form_uncontrolled_components"}"#));
        let outcome = data(app.handle(r#"{"op":"submit"}"#));
        assert_eq!(outcome["outcome"], "rejected");
        assert_eq!(outcome["route"], "/form_uncontrolled_components");
        assert_eq!(outcome["errors"]["email"], "Email is required");
        assert!(app.active_form().is_some());
        assert_eq!(app.store().revision(), 0);
    }

    #[test]
    fn test_stateless_validate_and_countries() {
        let schema = SchemaVariant::NoCountry.schema().unwrap();
        let mut app = handler(&schema);

        let result = data(app.handle(r#"{"op":"validate","record":{"name":"Ann"}}"#));
        assert_eq!(result["valid"], false);
        assert!(result["errors"].get("name").is_none());
        assert_eq!(result["errors"]["email"], "Email is required");

        let suggestions = data(app.handle(r#"{"op":"countries","query":"united"}"#));
        assert_eq!(suggestions["suggestions"], json!(["United Kingdom", "United States"]));
    }
}
