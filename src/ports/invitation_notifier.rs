//! Invitation notifier port.
//!
//! The core builds invitation payloads; delivery belongs to the notifier,
//! which may log, record or send them.

use async_trait::async_trait;

use crate::domain::offer_request::Invitation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifierError {
    #[error("Invitation delivery failed: {0}")]
    Delivery(String),
}

/// Hands invitation payloads to whatever delivers them.
#[async_trait]
pub trait InvitationNotifier: Send + Sync {
    async fn notify(&self, invitation: &Invitation) -> Result<(), NotifierError>;
}
