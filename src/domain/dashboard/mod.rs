//! Aggregation view over requests and their submissions.

pub mod counts;
pub mod overview;


pub use counts::{submission_counts, SubmissionCount};
pub use overview::{
    build_overview, group_by_request, sort_requests_newest_first, sort_submissions_newest_first,
    RequestOverview,
};
