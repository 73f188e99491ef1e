//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, and error
//! types that form the vocabulary of the offer desk domain.

mod due_date;
mod email;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use due_date::DueDate;
pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    generate_short_id, AttachmentId, CompanyId, OfferRequestId, OfferSubmissionId,
    SHORT_ID_LENGTH,
};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
