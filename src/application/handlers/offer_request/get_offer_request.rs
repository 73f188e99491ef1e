//! GetOfferRequestHandler - Query handler for one request.

use std::sync::Arc;

use crate::domain::foundation::OfferRequestId;
use crate::domain::offer_request::{OfferRequest, OfferRequestError};
use crate::ports::{fetch_one, Collection, PersistenceProvider};

/// Query to get a request by ID.
#[derive(Debug, Clone)]
pub struct GetOfferRequestQuery {
    pub request_id: OfferRequestId,
}

/// Handler for retrieving a request.
///
/// Unknown ids fail with `NotFound` rather than returning an empty value.
pub struct GetOfferRequestHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl GetOfferRequestHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(&self, query: GetOfferRequestQuery) -> Result<OfferRequest, OfferRequestError> {
        fetch_one(
            self.persistence.as_ref(),
            Collection::Requests,
            query.request_id.as_str(),
        )
        .await?
        .ok_or(OfferRequestError::NotFound(query.request_id))
    }
}
