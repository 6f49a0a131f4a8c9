//! Observability for formgate
//!
//! - Structured logs (JSON, one line per event)
//! - Typed lifecycle events
//! - Logs go to stderr; stdout carries command output
//!
//! Field values are never logged, only field names, counts and ids.
//!
//! # Usage
//!
//! ```ignore
//! use formgate::observability::{log_event_with_fields, Event, Logger};
//!
//! Logger::info("CONFIG_LOADED", &[("variant", "standard")]);
//! log_event_with_fields(Event::SubmissionAccepted, &[("session", "form:1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
