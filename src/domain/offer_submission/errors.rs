//! Offer submission error types.

use thiserror::Error;

use crate::domain::foundation::{
    AttachmentId, DomainError, ErrorCode, OfferRequestId, OfferSubmissionId, TransitionError,
    ValidationError,
};

use super::OfferSubmissionStatus;

/// Errors returned by the submission lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum OfferSubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Offer request not found: {0}")]
    RequestNotFound(OfferRequestId),

    #[error("Offer submission not found: {0}")]
    NotFound(OfferSubmissionId),

    #[error("Attachment {attachment_id} not found on submission {submission_id}")]
    AttachmentNotFound {
        submission_id: OfferSubmissionId,
        attachment_id: AttachmentId,
    },

    #[error("Offer request {0} is closed and no longer accepts submissions")]
    RequestClosed(OfferRequestId),

    #[error("Invalid status change for offer submission: {0}")]
    InvalidTransition(#[from] TransitionError<OfferSubmissionStatus>),

    #[error("Storage failure: {0}")]
    Infrastructure(DomainError),
}

impl OfferSubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OfferSubmissionError::Validation(_) => ErrorCode::ValidationFailed,
            OfferSubmissionError::RequestNotFound(_) => ErrorCode::OfferRequestNotFound,
            OfferSubmissionError::NotFound(_) => ErrorCode::OfferSubmissionNotFound,
            OfferSubmissionError::AttachmentNotFound { .. } => ErrorCode::AttachmentNotFound,
            OfferSubmissionError::RequestClosed(_) => ErrorCode::OfferRequestClosed,
            OfferSubmissionError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            OfferSubmissionError::Infrastructure(err) => err.code,
        }
    }

    /// Message safe to show to the end user.
    pub fn message(&self) -> String {
        match self {
            OfferSubmissionError::Infrastructure(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }

    /// True for the two "no such entity" cases that callers render as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OfferSubmissionError::RequestNotFound(_)
                | OfferSubmissionError::NotFound(_)
                | OfferSubmissionError::AttachmentNotFound { .. }
        )
    }
}

impl From<DomainError> for OfferSubmissionError {
    fn from(err: DomainError) -> Self {
        OfferSubmissionError::Infrastructure(err)
    }
}
