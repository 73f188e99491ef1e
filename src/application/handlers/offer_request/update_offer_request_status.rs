//! UpdateOfferRequestStatusHandler - Command handler for request status changes.
//!
//! Entering `Closed` is what makes later submissions fail; no other
//! bookkeeping is needed here.

use std::sync::Arc;

use crate::domain::foundation::OfferRequestId;
use crate::domain::offer_request::{OfferRequest, OfferRequestError, OfferRequestStatus};
use crate::ports::{encode_record, fetch_one, Collection, PersistenceProvider};

#[derive(Debug, Clone)]
pub struct UpdateOfferRequestStatusCommand {
    pub request_id: OfferRequestId,
    pub status: OfferRequestStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateOfferRequestStatusResult {
    pub request: OfferRequest,
    pub previous_status: OfferRequestStatus,
}

pub struct UpdateOfferRequestStatusHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl UpdateOfferRequestStatusHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(
        &self,
        cmd: UpdateOfferRequestStatusCommand,
    ) -> Result<UpdateOfferRequestStatusResult, OfferRequestError> {
        // 1. Load
        let mut request: OfferRequest = fetch_one(
            self.persistence.as_ref(),
            Collection::Requests,
            cmd.request_id.as_str(),
        )
        .await?
        .ok_or_else(|| OfferRequestError::NotFound(cmd.request_id.clone()))?;

        // 2. Apply the transition
        let previous_status = request.transition_to(cmd.status).map_err(|err| {
            tracing::warn!(request_id = %cmd.request_id, error = %err, "request status change rejected");
            err
        })?;

        // 3. Persist the status field only
        self.persistence
            .update_field(
                Collection::Requests,
                cmd.request_id.as_str(),
                "status",
                encode_record(&request.status())?,
            )
            .await?;

        tracing::info!(
            request_id = %cmd.request_id,
            from = %previous_status,
            to = %request.status(),
            "offer request status changed"
        );

        Ok(UpdateOfferRequestStatusResult {
            request,
            previous_status,
        })
    }
}
