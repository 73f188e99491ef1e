//! SubmitOfferHandler - Command handler for a company's offer.
//!
//! Order of checks: the request must exist, then it must not be closed,
//! then the form and file names must be valid. Blobs are written only after
//! all three pass. If a store or the final insert still fails, blobs already
//! written for the submission are deleted again.

use futures::future::join_all;
use std::sync::Arc;

use crate::domain::foundation::{OfferRequestId, OfferSubmissionId, Timestamp, ValidationError};
use crate::domain::offer_request::OfferRequest;
use crate::domain::offer_submission::{
    Attachment, LocationRef, NewOfferSubmission, OfferSubmission, OfferSubmissionError,
    UploadedFile,
};
use crate::ports::{
    encode_record, fetch_one, BlobStorage, BlobStorageError, Collection, PersistenceProvider,
};

/// Command to submit an offer against a request.
#[derive(Debug, Clone)]
pub struct SubmitOfferCommand {
    pub offer_request_id: OfferRequestId,
    pub offer: NewOfferSubmission,
    pub files: Vec<UploadedFile>,
}

pub struct SubmitOfferHandler {
    persistence: Arc<dyn PersistenceProvider>,
    blobs: Arc<dyn BlobStorage>,
}

impl SubmitOfferHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>, blobs: Arc<dyn BlobStorage>) -> Self {
        Self { persistence, blobs }
    }

    pub async fn handle(&self, cmd: SubmitOfferCommand) -> Result<OfferSubmission, OfferSubmissionError> {
        // 1. The request must exist and accept submissions
        let request: OfferRequest = fetch_one(
            self.persistence.as_ref(),
            Collection::Requests,
            cmd.offer_request_id.as_str(),
        )
        .await?
        .ok_or_else(|| OfferSubmissionError::RequestNotFound(cmd.offer_request_id.clone()))?;

        if !request.status().accepts_submissions() {
            tracing::warn!(request_id = %request.id(), "submission attempted on closed request");
            return Err(OfferSubmissionError::RequestClosed(request.id().clone()));
        }

        // 2. Validate the form before touching blob storage
        cmd.offer.validate(cmd.files.len())?;
        for file in &cmd.files {
            file.validate()?;
        }

        // 3. Store files, keeping upload order
        let attachments = self.store_files(&cmd.files).await?;
        let stored: Vec<LocationRef> = attachments
            .iter()
            .map(|attachment| attachment.location_ref().clone())
            .collect();

        // 4. Build and persist
        let submission = match self.persist(&request, cmd.offer, attachments).await {
            Ok(submission) => submission,
            Err(err) => {
                self.discard(&stored).await;
                return Err(err);
            }
        };

        tracing::info!(
            submission_id = %submission.id(),
            request_id = %request.id(),
            company = %submission.company_name(),
            attachments = submission.attachments().len(),
            "offer submitted"
        );

        Ok(submission)
    }

    async fn persist(
        &self,
        request: &OfferRequest,
        offer: NewOfferSubmission,
        attachments: Vec<Attachment>,
    ) -> Result<OfferSubmission, OfferSubmissionError> {
        let submission = OfferSubmission::new(
            OfferSubmissionId::generate(),
            request.id().clone(),
            offer,
            attachments,
            Timestamp::now(),
        )?;

        self.persistence
            .insert(
                Collection::Submissions,
                submission.id().as_str(),
                encode_record(&submission)?,
            )
            .await?;

        Ok(submission)
    }

    /// Stores every file. On any failure the ones that did land are deleted.
    async fn store_files(&self, files: &[UploadedFile]) -> Result<Vec<Attachment>, OfferSubmissionError> {
        let results = join_all(files.iter().map(|file| self.store_file(file))).await;

        let mut attachments = Vec::with_capacity(results.len());
        let mut failure = None;
        for result in results {
            match result {
                Ok(attachment) => attachments.push(attachment),
                Err(err) => {
                    failure.get_or_insert(err);
                }
            }
        }

        match failure {
            None => Ok(attachments),
            Some(err) => {
                let stored: Vec<LocationRef> = attachments
                    .iter()
                    .map(|attachment| attachment.location_ref().clone())
                    .collect();
                self.discard(&stored).await;
                Err(err)
            }
        }
    }

    async fn discard(&self, locations: &[LocationRef]) {
        for location in locations {
            if let Err(err) = self.blobs.delete(location).await {
                tracing::warn!(location = %location, error = %err, "orphaned blob left behind");
            }
        }
    }

    async fn store_file(&self, file: &UploadedFile) -> Result<Attachment, OfferSubmissionError> {
        let location = self
            .blobs
            .store(file.content.clone(), &file.name)
            .await
            .map_err(|err| match err {
                BlobStorageError::InvalidFileName(name) => {
                    ValidationError::invalid_format("file_name", format!("unusable file name {:?}", name))
                        .into()
                }
                other => OfferSubmissionError::Infrastructure(other.into()),
            })?;
        Ok(Attachment::from_upload(file, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::offer_request::OfferRequestStatus;
    use crate::domain::offer_submission::OfferSubmissionStatus;
    use std::collections::HashSet;

    fn handler(fx: &Fixture) -> SubmitOfferHandler {
        SubmitOfferHandler::new(fx.store.clone(), fx.blobs.clone())
    }

    async fn open_request(fx: &Fixture) -> OfferRequest {
        let request = request_created_at(Timestamp::now());
        fx.seed_request(&request).await;
        request
    }

    fn command(request: &OfferRequest, file_count: usize) -> SubmitOfferCommand {
        SubmitOfferCommand {
            offer_request_id: request.id().clone(),
            offer: offer_from("Acme"),
            files: files(file_count),
        }
    }

    #[tokio::test]
    async fn accepts_offer_with_attachment() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;

        let submission = handler(&fx).handle(command(&request, 1)).await.unwrap();

        assert_eq!(submission.status(), OfferSubmissionStatus::Submitted);
        assert_eq!(submission.offer_request_id(), request.id());
        assert_eq!(submission.attachments().len(), 1);
        let attachment = &submission.attachments()[0];
        assert_eq!(attachment.name(), "doc-0.pdf");
        assert_eq!(attachment.size_bytes(), 16);
        assert_eq!(
            fx.blobs.resolve(attachment.location_ref()).await.unwrap(),
            vec![0u8; 16]
        );
        assert_eq!(fx.store.count(Collection::Submissions).await, 1);
    }

    #[tokio::test]
    async fn five_files_produce_five_distinct_attachments_in_order() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;

        let submission = handler(&fx).handle(command(&request, 5)).await.unwrap();

        let ids: HashSet<_> = submission.attachments().iter().map(|a| a.id().clone()).collect();
        assert_eq!(ids.len(), 5);
        let names: Vec<_> = submission.attachments().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["doc-0.pdf", "doc-1.pdf", "doc-2.pdf", "doc-3.pdf", "doc-4.pdf"]);
    }

    #[tokio::test]
    async fn six_files_are_rejected_before_storing_anything() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;

        let err = handler(&fx).handle(command(&request, 6)).await.unwrap_err();

        assert!(matches!(err, OfferSubmissionError::Validation(_)));
        assert!(fx.blobs.is_empty().await);
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
    }

    #[tokio::test]
    async fn closed_request_rejects_submission() {
        let fx = Fixture::new();
        let mut request = request_created_at(Timestamp::now());
        request.transition_to(OfferRequestStatus::Closed).unwrap();
        fx.seed_request(&request).await;

        let err = handler(&fx).handle(command(&request, 1)).await.unwrap_err();

        assert!(matches!(err, OfferSubmissionError::RequestClosed(_)));
        assert_eq!(err.code(), ErrorCode::OfferRequestClosed);
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
        assert!(fx.blobs.is_empty().await);
    }

    #[tokio::test]
    async fn evaluating_request_still_accepts_submissions() {
        let fx = Fixture::new();
        let mut request = request_created_at(Timestamp::now());
        request.transition_to(OfferRequestStatus::Evaluating).unwrap();
        fx.seed_request(&request).await;

        assert!(handler(&fx).handle(command(&request, 0)).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let fx = Fixture::new();
        let err = handler(&fx)
            .handle(SubmitOfferCommand {
                offer_request_id: OfferRequestId::generate(),
                offer: offer_from("Acme"),
                files: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OfferSubmissionError::RequestNotFound(_)));
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;

        for offer in [
            NewOfferSubmission { company_name: String::new(), ..offer_from("Acme") },
            NewOfferSubmission { contact_email: String::new(), ..offer_from("Acme") },
            NewOfferSubmission { offer_details: "  ".into(), ..offer_from("Acme") },
        ] {
            let err = handler(&fx)
                .handle(SubmitOfferCommand {
                    offer_request_id: request.id().clone(),
                    offer,
                    files: vec![],
                })
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationFailed);
        }
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
    }

    #[tokio::test]
    async fn nameless_file_is_rejected() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;
        let err = handler(&fx)
            .handle(SubmitOfferCommand {
                offer_request_id: request.id().clone(),
                offer: offer_from("Acme"),
                files: vec![UploadedFile::new("", "text/plain", vec![1])],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OfferSubmissionError::Validation(_)));
    }

    #[tokio::test]
    async fn unusable_name_among_valid_files_stores_nothing() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;
        let mut uploads = files(1);
        uploads.push(UploadedFile::new("..", "text/plain", vec![1]));

        let err = handler(&fx)
            .handle(SubmitOfferCommand {
                offer_request_id: request.id().clone(),
                offer: offer_from("Acme"),
                files: uploads,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(fx.blobs.is_empty().await);
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
    }

    #[tokio::test]
    async fn failed_store_deletes_files_already_written() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;
        let blobs = Arc::new(FailingBlobStorage::new(fx.blobs.clone(), "doc-2.pdf"));

        let err = SubmitOfferHandler::new(fx.store.clone(), blobs)
            .handle(command(&request, 4))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::StorageError);
        assert!(fx.blobs.is_empty().await);
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
    }

    #[tokio::test]
    async fn failed_insert_deletes_stored_files() {
        let fx = Fixture::new();
        let request = open_request(&fx).await;
        let store = Arc::new(InsertFailingPersistence::new(fx.store.clone()));

        let err = SubmitOfferHandler::new(store, fx.blobs.clone())
            .handle(command(&request, 3))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(fx.blobs.is_empty().await);
        assert_eq!(fx.store.count(Collection::Submissions).await, 0);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let fx = Fixture::new();
        let err = SubmitOfferHandler::new(Arc::new(FailingPersistence), fx.blobs.clone())
            .handle(SubmitOfferCommand {
                offer_request_id: OfferRequestId::generate(),
                offer: offer_from("Acme"),
                files: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
