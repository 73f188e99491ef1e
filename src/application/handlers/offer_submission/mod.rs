//! Offer submission command and query handlers.

// Command handlers
mod submit_offer;
mod update_submission_status;

// Query handlers
mod get_submission;
mod list_submissions_for_request;
mod resolve_attachment;

pub use get_submission::{GetSubmissionHandler, GetSubmissionQuery};
pub use list_submissions_for_request::{
    ListSubmissionsForRequestHandler, ListSubmissionsForRequestQuery,
};
pub use resolve_attachment::{ResolveAttachmentHandler, ResolveAttachmentQuery, ResolvedAttachment};
pub use submit_offer::{SubmitOfferCommand, SubmitOfferHandler};
pub use update_submission_status::{
    UpdateSubmissionStatusCommand, UpdateSubmissionStatusHandler, UpdateSubmissionStatusResult,
};
