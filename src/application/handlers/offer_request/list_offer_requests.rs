//! ListOfferRequestsHandler - Query handler for all requests.

use std::sync::Arc;

use crate::domain::dashboard::sort_requests_newest_first;
use crate::domain::offer_request::{OfferRequest, OfferRequestError};
use crate::ports::{fetch_all, Collection, PersistenceProvider};

/// Query for every request, newest `created_at` first.
#[derive(Debug, Clone, Default)]
pub struct ListOfferRequestsQuery;

pub struct ListOfferRequestsHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl ListOfferRequestsHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(
        &self,
        _query: ListOfferRequestsQuery,
    ) -> Result<Vec<OfferRequest>, OfferRequestError> {
        let mut requests: Vec<OfferRequest> =
            fetch_all(self.persistence.as_ref(), Collection::Requests).await?;
        sort_requests_newest_first(&mut requests);
        Ok(requests)
    }
}
