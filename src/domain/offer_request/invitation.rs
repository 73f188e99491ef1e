//! Invitation payloads and submission links.

use serde::Serialize;

use crate::domain::foundation::{CompanyId, EmailAddress, OfferRequestId};

use super::{Company, OfferRequest};

/// Route fragment of the submission form.
pub const SUBMISSION_ROUTE: &str = "#/submit-offer";

/// Builds the submission URL for a request.
///
/// Pure: the output depends only on `base_origin` and `request_id`.
pub fn build_submission_link(base_origin: &str, request_id: &OfferRequestId) -> String {
    format!(
        "{}/{}/{}",
        base_origin.trim_end_matches('/'),
        SUBMISSION_ROUTE,
        request_id
    )
}

/// Builds submission links against a fixed origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationLinkBuilder {
    base_origin: String,
}

impl InvitationLinkBuilder {
    pub fn new(base_origin: impl Into<String>) -> Self {
        Self {
            base_origin: base_origin.into(),
        }
    }

    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    pub fn link_for(&self, request_id: &OfferRequestId) -> String {
        build_submission_link(&self.base_origin, request_id)
    }
}

/// Notification payload inviting one company to submit an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub request_id: OfferRequestId,
    pub request_title: String,
    pub company_id: CompanyId,
    pub company_name: String,
    pub company_email: EmailAddress,
    pub submission_link: String,
    pub subject: String,
    pub body: String,
}

impl Invitation {
    /// Builds the invitation for one invited company.
    pub fn for_company(request: &OfferRequest, company: &Company, links: &InvitationLinkBuilder) -> Self {
        let submission_link = links.link_for(request.id());
        let subject = format!("Invitation to Submit Offer: {}", request.title());
        let body = format!(
            "Dear {},\n\nYou are invited to submit an offer for \"{}\" by {}.\n\
             Please submit your offer using this link: {}\n",
            company.name(),
            request.title(),
            request.due_date(),
            submission_link
        );

        Self {
            request_id: request.id().clone(),
            request_title: request.title().to_string(),
            company_id: company.id().clone(),
            company_name: company.name().to_string(),
            company_email: company.email().clone(),
            submission_link,
            subject,
            body,
        }
    }

    /// Builds one invitation per invited company, in list order.
    pub fn for_request(request: &OfferRequest, links: &InvitationLinkBuilder) -> Vec<Self> {
        request
            .companies()
            .iter()
            .map(|company| Self::for_company(request, company, links))
            .collect()
    }
}
