//! Offer submission domain module.
//!
//! A company's response to an offer request, its attachments and the
//! reviewer-facing status.

mod aggregate;
mod attachment;
mod errors;
mod status;

pub use aggregate::{NewOfferSubmission, OfferSubmission, MAX_ATTACHMENTS};
pub use attachment::{sanitize_file_name, Attachment, LocationRef, UploadedFile};
pub use errors::OfferSubmissionError;
pub use status::OfferSubmissionStatus;
