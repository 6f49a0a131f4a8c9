//! Submit outcomes

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::schema::{FieldErrors, NormalizedRecord};

/// Why a submit attempt was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing has been touched yet
    Pristine,
    /// The last validation reported errors
    Invalid,
    /// The session claimed valid, the final re-check disagreed
    Stale,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Pristine => "pristine",
            RejectReason::Invalid => "invalid",
            RejectReason::Stale => "stale",
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Record written to the result store
    Accepted(NormalizedRecord),
    /// Nothing written
    Rejected {
        reason: RejectReason,
        errors: FieldErrors,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn accepted(&self) -> Option<&NormalizedRecord> {
        match self {
            Outcome::Accepted(record) => Some(record),
            Outcome::Rejected { .. } => None,
        }
    }

    pub fn reject_reason(&self) -> Option<RejectReason> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected { reason, .. } => Some(*reason),
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected { errors, .. } => Some(errors),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Outcome::Accepted(record) => json!({
                "outcome": "accepted",
                "record": record,
            }),
            Outcome::Rejected { reason, errors } => json!({
                "outcome": "rejected",
                "reason": reason,
                "errors": errors,
            }),
        }
    }
}
