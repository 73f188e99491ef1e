//! Invitation Notifier Adapters
//!
//! - **LoggingNotifier** - Writes each invitation to the tracing log
//! - **RecordingNotifier** - Keeps invitations in memory (testing)

mod logging;
mod recording;

pub use logging::LoggingNotifier;
pub use recording::RecordingNotifier;
