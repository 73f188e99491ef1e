use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::OfferRequestId;
use crate::domain::offer_request::OfferRequest;
use crate::domain::offer_submission::OfferSubmission;

/// Submission progress for one request, e.g. "2 / 5 submissions".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCount {
    pub received_count: usize,
    pub invited_count: usize,
}

impl SubmissionCount {
    /// Every invited company has answered.
    pub fn is_complete(&self) -> bool {
        self.invited_count > 0 && self.received_count >= self.invited_count
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {} submissions", self.received_count, self.invited_count)
    }
}

/// Counts received submissions per request in a single pass over each input.
///
/// Every request appears in the result, with `received_count = 0` when it has
/// no submissions. Submissions whose request is not among `requests` are
/// ignored.
pub fn submission_counts(
    requests: &[OfferRequest],
    submissions: &[OfferSubmission],
) -> HashMap<OfferRequestId, SubmissionCount> {
    let mut counts: HashMap<OfferRequestId, SubmissionCount> = requests
        .iter()
        .map(|request| {
            (
                request.id().clone(),
                SubmissionCount {
                    received_count: 0,
                    invited_count: request.invited_count(),
                },
            )
        })
        .collect();

    for submission in submissions {
        if let Some(count) = counts.get_mut(submission.offer_request_id()) {
            count.received_count += 1;
        }
    }

    counts
}
