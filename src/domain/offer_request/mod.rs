//! Offer request domain module.
//!
//! Handles the request side of the workflow: authoring a call for proposals,
//! the invited company list, invitations, and the closing state machine.

mod aggregate;
mod company;
mod errors;
mod invitation;
mod status;

pub use aggregate::{NewOfferRequest, OfferRequest, MAX_TITLE_LENGTH};
pub use company::{Company, CompanyInput};
pub use errors::OfferRequestError;
pub use invitation::{build_submission_link, Invitation, InvitationLinkBuilder, SUBMISSION_ROUTE};
pub use status::OfferRequestStatus;
