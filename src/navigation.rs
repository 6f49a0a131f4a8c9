//! Routes and navigation requests
//!
//! The landing page plus one page per form-entry strategy. The core only
//! ever asks to go back to the landing page after an accepted submit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};

/// Known pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing page showing the stored record
    Main,
    /// Form read through manual input references
    UncontrolledForm,
    /// Form with library-managed field bindings
    HookForm,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Main, Route::UncontrolledForm, Route::HookForm];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Main => "/",
            Route::UncontrolledForm => "/form_uncontrolled_components",
            Route::HookForm => "/react_hook_form",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Main => "Main Page",
            Route::UncontrolledForm => "Form with uncontrolled components",
            Route::HookForm => "Form with React Hook Form",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Whether this route mounts a form
    pub fn is_form(&self) -> bool {
        !matches!(self, Route::Main)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| format!("unknown route '{}'", s))
    }
}

/// Receives navigation requests
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    fn current(&self) -> Route;
}

/// Navigator that records every visited route, starting on the landing page.
#[derive(Debug, Clone)]
pub struct History {
    visited: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self {
            visited: vec![Route::Main],
        }
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        log_event_with_fields(
            Event::Navigation,
            &[("from", self.current().path()), ("to", route.path())],
        );
        self.visited.push(route);
    }

    fn current(&self) -> Route {
        self.visited.last().copied().unwrap_or(Route::Main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_only_form_routes_mount_forms() {
        assert!(!Route::Main.is_form());
        assert!(Route::HookForm.is_form());
        assert!(Route::UncontrolledForm.is_form());
    }

    #[test]
    fn test_history_records_visits() {
        let mut history = History::new();
        assert_eq!(history.current(), Route::Main);

        history.navigate(Route::HookForm);
        history.navigate(Route::Main);
        assert_eq!(history.visited(), &[Route::Main, Route::HookForm, Route::Main]);
        assert_eq!(history.current(), Route::Main);
    }
}
