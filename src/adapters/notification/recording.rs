use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::offer_request::Invitation;
use crate::ports::{InvitationNotifier, NotifierError};

/// Notifier that keeps every invitation it receives.
///
/// Addresses registered with [`RecordingNotifier::failing_for`] are
/// rejected, which lets tests exercise partial delivery.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Invitation>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects deliveries to `email` from now on.
    pub fn failing_for(self, email: impl Into<String>) -> Self {
        self.failing
            .lock()
            .expect("failing set lock poisoned")
            .insert(email.into());
        self
    }

    /// Invitations accepted so far, in order.
    pub fn sent(&self) -> Vec<Invitation> {
        self.sent.lock().expect("recording lock poisoned").clone()
    }
}

#[async_trait]
impl InvitationNotifier for RecordingNotifier {
    async fn notify(&self, invitation: &Invitation) -> Result<(), NotifierError> {
        let rejected = self
            .failing
            .lock()
            .expect("failing set lock poisoned")
            .contains(invitation.company_email.as_str());
        if rejected {
            return Err(NotifierError::Delivery(format!(
                "mailbox {} unavailable",
                invitation.company_email
            )));
        }

        self.sent
            .lock()
            .expect("recording lock poisoned")
            .push(invitation.clone());
        Ok(())
    }
}
