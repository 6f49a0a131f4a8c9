//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in formgate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    /// Configuration loaded
    ConfigLoaded,
    /// Rule set resolved
    SchemaLoaded,

    // Forms
    /// Form mounted on a route
    FormMounted,
    /// In-flight form dropped by navigation
    FormDiscarded,
    /// Route change requested
    Navigation,

    // Submission
    /// Gate accepted a submit
    SubmissionAccepted,
    /// Gate rejected a submit
    SubmissionRejected,
    /// Result store replaced its record
    StoreWritten,

    // Driver
    /// Malformed request line
    RequestRejected,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::FormMounted => "FORM_MOUNTED",
            Event::FormDiscarded => "FORM_DISCARDED",
            Event::Navigation => "NAVIGATION",
            Event::SubmissionAccepted => "SUBMISSION_ACCEPTED",
            Event::SubmissionRejected => "SUBMISSION_REJECTED",
            Event::StoreWritten => "STORE_WRITTEN",
            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
