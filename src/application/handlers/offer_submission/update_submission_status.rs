//! UpdateSubmissionStatusHandler - Command handler for reviewer status changes.

use std::sync::Arc;

use crate::domain::foundation::OfferSubmissionId;
use crate::domain::offer_submission::{OfferSubmission, OfferSubmissionError, OfferSubmissionStatus};
use crate::ports::{encode_record, Collection, PersistenceProvider};

use super::get_submission::load_submission;

#[derive(Debug, Clone)]
pub struct UpdateSubmissionStatusCommand {
    pub submission_id: OfferSubmissionId,
    pub status: OfferSubmissionStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateSubmissionStatusResult {
    pub submission: OfferSubmission,
    pub previous_status: OfferSubmissionStatus,
}

pub struct UpdateSubmissionStatusHandler {
    persistence: Arc<dyn PersistenceProvider>,
}

impl UpdateSubmissionStatusHandler {
    pub fn new(persistence: Arc<dyn PersistenceProvider>) -> Self {
        Self { persistence }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubmissionStatusCommand,
    ) -> Result<UpdateSubmissionStatusResult, OfferSubmissionError> {
        let mut submission = load_submission(self.persistence.as_ref(), &cmd.submission_id).await?;

        let previous_status = submission.transition_to(cmd.status)?;

        self.persistence
            .update_field(
                Collection::Submissions,
                cmd.submission_id.as_str(),
                "status",
                encode_record(&submission.status())?,
            )
            .await?;

        tracing::info!(
            submission_id = %cmd.submission_id,
            from = %previous_status,
            to = %submission.status(),
            "offer submission status changed"
        );

        Ok(UpdateSubmissionStatusResult {
            submission,
            previous_status,
        })
    }
}
