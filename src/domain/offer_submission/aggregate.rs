//! OfferSubmission aggregate.
//!
//! One invited company's response to an offer request.
//!
//! # Ownership
//!
//! A submission owns its attachments. It references its request by id
//! only; deleting a request does not cascade here.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AttachmentId, EmailAddress, OfferRequestId, OfferSubmissionId, StateMachine, Timestamp,
    TransitionError, ValidationError,
};

use super::{Attachment, OfferSubmissionStatus};

/// Maximum number of files accepted with one submission.
pub const MAX_ATTACHMENTS: usize = 5;

/// Form fields of a new submission.
#[derive(Debug, Clone, Default)]
pub struct NewOfferSubmission {
    pub company_name: String,
    pub contact_person: String,
    pub contact_email: String,
    pub offer_details: String,
    pub pricing: String,
}

impl NewOfferSubmission {
    /// Checks required fields and the attachment limit.
    pub fn validate(&self, file_count: usize) -> Result<(), ValidationError> {
        self.checked(file_count).map(|_| ())
    }

    /// Runs [`validate`](Self::validate) and keeps the parsed contact email.
    fn checked(&self, file_count: usize) -> Result<EmailAddress, ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        let contact_email = EmailAddress::parse("contact_email", &self.contact_email)?;
        if self.offer_details.trim().is_empty() {
            return Err(ValidationError::empty_field("offer_details"));
        }
        if file_count > MAX_ATTACHMENTS {
            return Err(ValidationError::too_many("files", MAX_ATTACHMENTS, file_count));
        }
        Ok(contact_email)
    }
}

/// OfferSubmission aggregate.
///
/// # Invariants
///
/// - `company_name`, `contact_email` and `offer_details` are non-empty
/// - at most [`MAX_ATTACHMENTS`] attachments
/// - `status` never returns to `Submitted` once it has left it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSubmission {
    id: OfferSubmissionId,
    offer_request_id: OfferRequestId,
    company_name: String,
    contact_person: String,
    contact_email: EmailAddress,
    offer_details: String,
    pricing: String,
    attachments: Vec<Attachment>,
    submitted_at: Timestamp,
    status: OfferSubmissionStatus,
}

impl OfferSubmission {
    /// Creates a submission in the `Submitted` state.
    pub fn new(
        id: OfferSubmissionId,
        offer_request_id: OfferRequestId,
        input: NewOfferSubmission,
        attachments: Vec<Attachment>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let contact_email = input.checked(attachments.len())?;

        Ok(Self {
            id,
            offer_request_id,
            company_name: input.company_name.trim().to_string(),
            contact_person: input.contact_person.trim().to_string(),
            contact_email,
            offer_details: input.offer_details,
            pricing: input.pricing,
            attachments,
            submitted_at: now,
            status: OfferSubmissionStatus::Submitted,
        })
    }

    pub fn id(&self) -> &OfferSubmissionId {
        &self.id
    }

    pub fn offer_request_id(&self) -> &OfferRequestId {
        &self.offer_request_id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn contact_person(&self) -> &str {
        &self.contact_person
    }

    pub fn contact_email(&self) -> &EmailAddress {
        &self.contact_email
    }

    pub fn offer_details(&self) -> &str {
        &self.offer_details
    }

    pub fn pricing(&self) -> &str {
        &self.pricing
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn attachment(&self, id: &AttachmentId) -> Option<&Attachment> {
        self.attachments.iter().find(|a| a.id() == id)
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    pub fn status(&self) -> OfferSubmissionStatus {
        self.status
    }

    /// Moves the submission to `target`, returning the previous status.
    pub fn transition_to(
        &mut self,
        target: OfferSubmissionStatus,
    ) -> Result<OfferSubmissionStatus, TransitionError<OfferSubmissionStatus>> {
        let next = self.status.transition_to(target)?;
        Ok(std::mem::replace(&mut self.status, next))
    }
}
