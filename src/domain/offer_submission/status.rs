//! OfferSubmissionStatus enum for tracking review of a submitted offer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Review status of an offer submission.
///
/// Review is non-linear in practice, so the table is permissive: every
/// edge is allowed except one that re-enters `Submitted`. The usual order
/// is Submitted -> Viewed -> Shortlisted/Rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OfferSubmissionStatus {
    #[default]
    Submitted,
    Viewed,
    Shortlisted,
    Rejected,
}

impl OfferSubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OfferSubmissionStatus::Submitted => "Submitted",
            OfferSubmissionStatus::Viewed => "Viewed",
            OfferSubmissionStatus::Shortlisted => "Shortlisted",
            OfferSubmissionStatus::Rejected => "Rejected",
        }
    }
}

impl StateMachine for OfferSubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OfferSubmissionStatus::*;
        match target {
            Submitted => false,
            Viewed | Shortlisted | Rejected => true,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OfferSubmissionStatus::*;
        vec![Viewed, Shortlisted, Rejected]
    }
}

impl fmt::Display for OfferSubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
