//! ResolveAttachmentHandler - fetches the bytes behind an attachment.

use std::sync::Arc;

use crate::domain::foundation::{AttachmentId, OfferSubmissionId};
use crate::domain::offer_submission::{Attachment, OfferSubmissionError};
use crate::ports::{BlobStorage, BlobStorageError, PersistenceProvider};

use super::get_submission::load_submission;

#[derive(Debug, Clone)]
pub struct ResolveAttachmentQuery {
    pub submission_id: OfferSubmissionId,
    pub attachment_id: AttachmentId,
}

#[derive(Debug, Clone)]
pub struct ResolvedAttachment {
    pub attachment: Attachment,
    pub content: Vec<u8>,
}

pub struct ResolveAttachmentHandler {
    persistence: Arc<dyn PersistenceProvider>,
    blobs: Arc<dyn BlobStorage>,
}

impl ResolveAttachmentHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>, blobs: Arc<dyn BlobStorage>) -> Self {
        Self { persistence, blobs }
    }

    pub async fn handle(
        &self,
        query: ResolveAttachmentQuery,
    ) -> Result<ResolvedAttachment, OfferSubmissionError> {
        let submission = load_submission(self.persistence.as_ref(), &query.submission_id).await?;

        let not_found = || OfferSubmissionError::AttachmentNotFound {
            submission_id: query.submission_id.clone(),
            attachment_id: query.attachment_id.clone(),
        };

        let attachment = submission
            .attachment(&query.attachment_id)
            .cloned()
            .ok_or_else(not_found)?;

        let content = self
            .blobs
            .resolve(attachment.location_ref())
            .await
            .map_err(|err| match err {
                BlobStorageError::NotFound(_) => {
                    tracing::warn!(
                        submission_id = %query.submission_id,
                        location = %attachment.location_ref(),
                        "attachment metadata points at a missing blob"
                    );
                    not_found()
                }
                other => OfferSubmissionError::Infrastructure(other.into()),
            })?;

        Ok(ResolvedAttachment {
            attachment,
            content,
        })
    }
}
