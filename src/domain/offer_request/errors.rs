//! Offer request error types.
//!
//! | Error | Caller treatment |
//! |-------|------------------|
//! | Validation | correct input and resubmit |
//! | NotFound | render as missing (404) |
//! | InvalidTransition | no-op with explanation |
//! | Infrastructure | propagate, caller decides on retry |

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, OfferRequestId, TransitionError, ValidationError,
};

use super::OfferRequestStatus;

/// Errors returned by the request lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum OfferRequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Offer request not found: {0}")]
    NotFound(OfferRequestId),

    #[error("Invalid status change for offer request: {0}")]
    InvalidTransition(#[from] TransitionError<OfferRequestStatus>),

    #[error("Storage failure: {0}")]
    Infrastructure(DomainError),
}

impl OfferRequestError {
    pub fn not_found(id: OfferRequestId) -> Self {
        OfferRequestError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OfferRequestError::Validation(_) => ErrorCode::ValidationFailed,
            OfferRequestError::NotFound(_) => ErrorCode::OfferRequestNotFound,
            OfferRequestError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            OfferRequestError::Infrastructure(err) => err.code,
        }
    }

    /// Message safe to show to the end user.
    pub fn message(&self) -> String {
        match self {
            OfferRequestError::Infrastructure(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for OfferRequestError {
    fn from(err: DomainError) -> Self {
        OfferRequestError::Infrastructure(err)
    }
}
