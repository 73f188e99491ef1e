//! GetDashboardHandler - Query handler for the requester's dashboard.
//!
//! Reads both collections once and groups them in memory.

use std::sync::Arc;

use crate::domain::dashboard::{build_overview, RequestOverview};
use crate::domain::foundation::DomainError;
use crate::domain::offer_request::OfferRequest;
use crate::domain::offer_submission::OfferSubmission;
use crate::ports::{fetch_all, Collection, PersistenceProvider};

#[derive(Debug, Clone, Default)]
pub struct GetDashboardQuery;

/// One row per request, newest request first.
pub type GetDashboardResult = Vec<RequestOverview>;

pub struct GetDashboardHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl GetDashboardHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(&self, _query: GetDashboardQuery) -> Result<GetDashboardResult, DomainError> {
        let (requests, submissions) = futures::try_join!(
            fetch_all::<OfferRequest>(self.persistence.as_ref(), Collection::Requests),
            fetch_all::<OfferSubmission>(self.persistence.as_ref(), Collection::Submissions),
        )?;

        tracing::debug!(
            requests = requests.len(),
            submissions = submissions.len(),
            "dashboard assembled"
        );
        Ok(build_overview(requests, submissions))
    }
}
