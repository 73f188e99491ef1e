//! GetSubmissionHandler - Query handler for one submission.

use std::sync::Arc;

use crate::domain::foundation::OfferSubmissionId;
use crate::domain::offer_submission::{OfferSubmission, OfferSubmissionError};
use crate::ports::{fetch_one, Collection, PersistenceProvider};

#[derive(Debug, Clone)]
pub struct GetSubmissionQuery {
    pub submission_id: OfferSubmissionId,
}

pub struct GetSubmissionHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl GetSubmissionHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(
        &self,
        query: GetSubmissionQuery,
    ) -> Result<OfferSubmission, OfferSubmissionError> {
        load_submission(self.persistence.as_ref(), &query.submission_id).await
    }
}

/// Loads a submission, failing with `NotFound` when absent.
pub(super) async fn load_submission(
    persistence: &dyn PersistenceProvider,
    id: &OfferSubmissionId,
) -> Result<OfferSubmission, OfferSubmissionError> {
    fetch_one(persistence, Collection::Submissions, id.as_str())
        .await?
        .ok_or_else(|| OfferSubmissionError::NotFound(id.clone()))
}
