//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod offer_request;
pub mod offer_submission;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use offer_request::{
    CreateOfferRequestCommand, CreateOfferRequestHandler, CreateOfferRequestResult,
    GenerateDescriptionCommand, GenerateDescriptionHandler, GenerateDescriptionResult,
    GetOfferRequestHandler, GetOfferRequestQuery, ListOfferRequestsHandler,
    ListOfferRequestsQuery, UpdateOfferRequestStatusCommand, UpdateOfferRequestStatusHandler,
    UpdateOfferRequestStatusResult,
};
pub use offer_submission::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsForRequestHandler,
    ListSubmissionsForRequestQuery, ResolveAttachmentHandler, ResolveAttachmentQuery,
    ResolvedAttachment, SubmitOfferCommand, SubmitOfferHandler, UpdateSubmissionStatusCommand,
    UpdateSubmissionStatusHandler, UpdateSubmissionStatusResult,
};
