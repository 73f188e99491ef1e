//! CreateOfferRequestHandler - Command handler for publishing a new request.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::offer_request::{
    Invitation, InvitationLinkBuilder, NewOfferRequest, OfferRequest, OfferRequestError,
};
use crate::ports::{encode_record, Collection, InvitationNotifier, PersistenceProvider};

/// Command to create an offer request.
#[derive(Debug, Clone)]
pub struct CreateOfferRequestCommand {
    pub request: NewOfferRequest,
}

/// Result of successful request creation.
#[derive(Debug, Clone)]
pub struct CreateOfferRequestResult {
    /// The persisted request.
    pub request: OfferRequest,
    /// Invitations the notifier accepted.
    pub dispatched: Vec<Invitation>,
    /// Invitations the notifier rejected. The request stays persisted.
    pub failed: Vec<Invitation>,
}

/// Handler for creating offer requests.
pub struct CreateOfferRequestHandler {
    persistence: Arc<dyn PersistenceProvider>,
    notifier: Arc<dyn InvitationNotifier>,
    links: InvitationLinkBuilder,
}

impl CreateOfferRequestHandler {
    pub fn new(
        persistence: Arc<dyn PersistenceProvider>,
        notifier: Arc<dyn InvitationNotifier>,
        links: InvitationLinkBuilder,
    ) -> Self {
        Self {
            persistence,
            notifier,
            links,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateOfferRequestCommand,
    ) -> Result<CreateOfferRequestResult, OfferRequestError> {
        // 1. Validate and build the aggregate
        let request = OfferRequest::new(cmd.request, Timestamp::now())?;

        // 2. Persist
        self.persistence
            .insert(
                Collection::Requests,
                request.id().as_str(),
                encode_record(&request)?,
            )
            .await?;

        tracing::info!(
            request_id = %request.id(),
            title = %request.title(),
            companies = request.invited_count(),
            due_date = %request.due_date(),
            "offer request created"
        );

        // 3. Hand invitations to the notifier; failures do not undo the create
        let mut dispatched = Vec::new();
        let mut failed = Vec::new();
        for invitation in Invitation::for_request(&request, &self.links) {
            match self.notifier.notify(&invitation).await {
                Ok(()) => dispatched.push(invitation),
                Err(err) => {
                    tracing::warn!(
                        request_id = %request.id(),
                        company = %invitation.company_name,
                        error = %err,
                        "invitation not dispatched"
                    );
                    failed.push(invitation);
                }
            }
        }

        Ok(CreateOfferRequestResult {
            request,
            dispatched,
            failed,
        })
    }
}
