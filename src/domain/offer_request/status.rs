//! OfferRequestStatus enum for tracking the closing workflow of a request.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of an offer request.
///
/// Serialized with the labels used by stored records, so imported data
/// (including `Pending`) reads back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OfferRequestStatus {
    /// Only reachable through imported data. Never produced by `create`.
    Pending,
    #[default]
    #[serde(rename = "Submissions Open")]
    SubmissionsOpen,
    Evaluating,
    Closed,
}

impl OfferRequestStatus {
    /// Returns true if new submissions may be recorded against the request.
    pub fn accepts_submissions(&self) -> bool {
        !matches!(self, OfferRequestStatus::Closed)
    }

    /// Returns the record label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            OfferRequestStatus::Pending => "Pending",
            OfferRequestStatus::SubmissionsOpen => "Submissions Open",
            OfferRequestStatus::Evaluating => "Evaluating",
            OfferRequestStatus::Closed => "Closed",
        }
    }
}

impl StateMachine for OfferRequestStatus {
    /// Valid transitions:
    /// - SubmissionsOpen -> Evaluating
    /// - SubmissionsOpen -> Closed
    /// - Evaluating -> Closed
    fn can_transition_to(&self, target: &Self) -> bool {
        use OfferRequestStatus::*;
        matches!(
            (self, target),
            (SubmissionsOpen, Evaluating) | (SubmissionsOpen, Closed) | (Evaluating, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OfferRequestStatus::*;
        match self {
            Pending => vec![],
            SubmissionsOpen => vec![Evaluating, Closed],
            Evaluating => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for OfferRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
