//! Dashboard query handlers.
//!
//! Read-only handlers for aggregating and viewing dashboard data.

mod get_dashboard;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
