//! Form session state
//!
//! Bridges input events to the validator, whichever input strategy
//! produces them. Every edit re-validates the whole draft, so cross-field
//! rules see the latest value of both fields.
//!
//! # Lifecycle
//!
//! - Created on form mount with every field empty
//! - `Pristine` until the first edit, `Dirty` afterwards, never back
//! - Dropped on navigation away; drafts are not recovered

mod errors;
mod state;

pub use errors::{SessionError, SessionResult};
pub use state::{FormSession, SessionId, SessionPhase};
