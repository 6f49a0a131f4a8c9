//! Submission gate
//!
//! The authoritative pre-commit check. A UI's "submit enabled" flag is
//! only advisory; nothing reaches the result store without passing here.
//!
//! Flow:
//! 1. Pristine or invalid session: reject, no store write
//! 2. Re-run the validator on the draft
//! 3. Fresh result invalid: reject with the fresh errors, session adopts them
//! 4. Fresh result valid: write the normalized record, accept

mod outcome;

pub use outcome::{Outcome, RejectReason};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::FieldErrors;
use crate::session::{FormSession, SessionPhase};
use crate::store::ResultStore;

/// Decides a submit attempt and commits accepted records.
pub fn submit<S>(session: &mut FormSession<'_>, store: &mut S) -> Outcome
where
    S: ResultStore + ?Sized,
{
    let session_id = session.id().0.clone();

    if !session.is_submittable() {
        let reason = if session.phase() == SessionPhase::Pristine {
            RejectReason::Pristine
        } else {
            RejectReason::Invalid
        };
        return reject(&session_id, reason, session.current_errors());
    }

    let fresh = session.revalidate().record().cloned();
    match fresh {
        Some(record) => {
            store.write(record.clone());
            log_event_with_fields(Event::SubmissionAccepted, &[("session", &session_id)]);
            Outcome::Accepted(record)
        }
        None => reject(&session_id, RejectReason::Stale, session.current_errors()),
    }
}

fn reject(session_id: &str, reason: RejectReason, errors: FieldErrors) -> Outcome {
    let count = errors.len().to_string();
    log_event_with_fields(
        Event::SubmissionRejected,
        &[
            ("errors", &count),
            ("reason", reason.as_str()),
            ("session", session_id),
        ],
    );
    Outcome::Rejected { reason, errors }
}
