use async_trait::async_trait;

use crate::domain::offer_request::Invitation;
use crate::ports::{InvitationNotifier, NotifierError};

/// Notifier that logs invitations instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InvitationNotifier for LoggingNotifier {
    async fn notify(&self, invitation: &Invitation) -> Result<(), NotifierError> {
        tracing::info!(
            request_id = %invitation.request_id,
            company = %invitation.company_name,
            to = %invitation.company_email,
            link = %invitation.submission_link,
            subject = %invitation.subject,
            "invitation prepared"
        );
        Ok(())
    }
}
