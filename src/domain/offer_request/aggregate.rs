//! OfferRequest aggregate.
//!
//! An offer request invites a fixed list of companies to submit competing
//! offers by a due date.
//!
//! # Ownership
//!
//! The request owns its company list. Submissions reference the request
//! by id but are not owned by it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DueDate, OfferRequestId, StateMachine, Timestamp, TransitionError, ValidationError,
};

use super::{Company, CompanyInput, OfferRequestStatus};

/// Maximum length for request title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Input for authoring a new request.
#[derive(Debug, Clone, Default)]
pub struct NewOfferRequest {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub requirements: String,
    pub due_date: String,
    pub companies: Vec<CompanyInput>,
}

/// OfferRequest aggregate - a call for proposals with a deadline.
///
/// # Invariants
///
/// - `id` is unique and never changes
/// - `title` is non-empty
/// - `companies` is non-empty, names unique, emails well formed
/// - `status` only moves along the edges of [`OfferRequestStatus`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    id: OfferRequestId,
    title: String,
    description: String,
    keywords: String,
    requirements: String,
    due_date: DueDate,
    status: OfferRequestStatus,
    companies: Vec<Company>,
    created_at: Timestamp,
}

impl OfferRequest {
    /// Creates a new request open for submissions.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the title is blank or too long, the due date is
    ///   not strictly after `now`, or the company list is invalid
    pub fn new(input: NewOfferRequest, now: Timestamp) -> Result<Self, ValidationError> {
        let title = Self::validate_title(&input.title)?;
        let due_date = DueDate::parse(&input.due_date)?;
        due_date.ensure_after(&now)?;
        let companies = Company::new_list(&input.companies)?;

        Ok(Self {
            id: OfferRequestId::generate(),
            title,
            description: input.description,
            keywords: input.keywords,
            requirements: input.requirements,
            due_date,
            status: OfferRequestStatus::SubmissionsOpen,
            companies,
            created_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &OfferRequestId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn due_date(&self) -> DueDate {
        self.due_date
    }

    pub fn status(&self) -> OfferRequestStatus {
        self.status
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Number of invited companies.
    pub fn invited_count(&self) -> usize {
        self.companies.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the request to `target`, returning the previous status.
    ///
    /// # Errors
    ///
    /// - `TransitionError` if the edge is not allowed; the status is unchanged
    pub fn transition_to(
        &mut self,
        target: OfferRequestStatus,
    ) -> Result<OfferRequestStatus, TransitionError<OfferRequestStatus>> {
        let next = self.status.transition_to(target)?;
        Ok(std::mem::replace(&mut self.status, next))
    }

    fn validate_title(title: &str) -> Result<String, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::invalid_format(
                "title",
                format!("must be {} characters or less", MAX_TITLE_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}
