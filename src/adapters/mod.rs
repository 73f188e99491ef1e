//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Persistence providers (in-memory, YAML files)
//! - `blob` - Attachment storage (in-memory, local filesystem)
//! - `notification` - Invitation notifiers (log, recording)
//! - `ai` - Description generators (OpenAI-compatible, mock)

pub mod ai;
pub mod blob;
pub mod notification;
pub mod storage;

pub use ai::{MockDescriptionGenerator, OpenAIDescriptionConfig, OpenAIDescriptionGenerator};
pub use blob::{InMemoryBlobStorage, LocalBlobStorage};
pub use notification::{LoggingNotifier, RecordingNotifier};
pub use storage::{FilePersistence, InMemoryPersistence};
