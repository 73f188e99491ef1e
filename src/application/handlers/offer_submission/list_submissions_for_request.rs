//! ListSubmissionsForRequestHandler - Query handler for one request's offers.

use std::sync::Arc;

use crate::domain::dashboard::sort_submissions_newest_first;
use crate::domain::foundation::OfferRequestId;
use crate::domain::offer_submission::{OfferSubmission, OfferSubmissionError};
use crate::ports::{fetch_all, Collection, PersistenceProvider};

/// Query for a request's submissions, newest `submitted_at` first.
///
/// An unknown request id yields an empty list.
#[derive(Debug, Clone)]
pub struct ListSubmissionsForRequestQuery {
    pub offer_request_id: OfferRequestId,
}

pub struct ListSubmissionsForRequestHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl ListSubmissionsForRequestHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(
        &self,
        query: ListSubmissionsForRequestQuery,
    ) -> Result<Vec<OfferSubmission>, OfferSubmissionError> {
        let all: Vec<OfferSubmission> =
            fetch_all(self.persistence.as_ref(), Collection::Submissions).await?;
        let mut matching: Vec<_> = all
            .into_iter()
            .filter(|s| s.offer_request_id() == &query.offer_request_id)
            .collect();
        sort_submissions_newest_first(&mut matching);
        Ok(matching)
    }
}
