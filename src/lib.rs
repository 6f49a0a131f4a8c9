//! formgate - shared field rules, validation and submission gating
//!
//! One rule set drives every way of filling in the sign-up form:
//! - schema: field rules, records and the validator
//! - session: per-form draft, touched fields and current errors
//! - gate: the only path from a session into the result store
//! - store: last accepted record
//! - forms: bound and uncontrolled input strategies
//! - navigation, countries: page routes and autocomplete data

pub mod api;
pub mod cli;
pub mod countries;
pub mod forms;
pub mod gate;
pub mod navigation;
pub mod observability;
pub mod schema;
pub mod session;
pub mod store;
