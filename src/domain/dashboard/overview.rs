use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::OfferRequestId;
use crate::domain::offer_request::OfferRequest;
use crate::domain::offer_submission::OfferSubmission;

use super::SubmissionCount;

/// One row of the requester's dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOverview {
    pub request: OfferRequest,

    /// Newest `submitted_at` first
    pub submissions: Vec<OfferSubmission>,

    pub counts: SubmissionCount,
}

/// Buckets submissions by the request they answer, keeping input order
/// within each bucket.
pub fn group_by_request(
    submissions: Vec<OfferSubmission>,
) -> HashMap<OfferRequestId, Vec<OfferSubmission>> {
    let mut groups: HashMap<OfferRequestId, Vec<OfferSubmission>> = HashMap::new();
    for submission in submissions {
        groups
            .entry(submission.offer_request_id().clone())
            .or_default()
            .push(submission);
    }
    groups
}

/// Orders requests newest `created_at` first.
pub fn sort_requests_newest_first(requests: &mut [OfferRequest]) {
    requests.sort_by(|a, b| b.created_at().cmp(a.created_at()));
}

/// Orders submissions newest `submitted_at` first.
pub fn sort_submissions_newest_first(submissions: &mut [OfferSubmission]) {
    submissions.sort_by(|a, b| b.submitted_at().cmp(a.submitted_at()));
}

/// Builds the dashboard rows, newest request first.
///
/// Orphan submissions (no matching request) are dropped.
pub fn build_overview(
    mut requests: Vec<OfferRequest>,
    submissions: Vec<OfferSubmission>,
) -> Vec<RequestOverview> {
    sort_requests_newest_first(&mut requests);
    let mut groups = group_by_request(submissions);

    requests
        .into_iter()
        .map(|request| {
            let mut submissions = groups.remove(request.id()).unwrap_or_default();
            sort_submissions_newest_first(&mut submissions);
            let counts = SubmissionCount {
                received_count: submissions.len(),
                invited_count: request.invited_count(),
            };
            RequestOverview {
                request,
                submissions,
                counts,
            }
        })
        .collect()
}
