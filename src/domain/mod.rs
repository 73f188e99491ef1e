//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, emails, errors)
//! - `offer_request` - Offer request aggregate, invited companies and invitations
//! - `offer_submission` - Offer submission aggregate and attachments
//! - `dashboard` - Aggregation view over requests and submissions

pub mod dashboard;
pub mod foundation;
pub mod offer_request;
pub mod offer_submission;
