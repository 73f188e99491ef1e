//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PersistenceProvider` - Record store for requests and submissions
//! - `BlobStorage` - Attachment bytes behind opaque location refs
//! - `InvitationNotifier` - Delivery of invitation payloads
//! - `DescriptionGenerator` - Keyword-driven description drafts

mod blob_storage;
mod description_generator;
mod invitation_notifier;
mod persistence_provider;

pub use blob_storage::{BlobStorage, BlobStorageError};
pub use description_generator::{
    description_prompt, DescriptionGenerator, GeneratedDescription, UnavailableReason,
    PLACEHOLDER_EMPTY, PLACEHOLDER_FAILED, PLACEHOLDER_INVALID_API_KEY,
    PLACEHOLDER_NOT_CONFIGURED,
};
pub use invitation_notifier::{InvitationNotifier, NotifierError};
pub use persistence_provider::{
    apply_field, decode_record, duplicate_record, encode_record, fetch_all, fetch_one,
    record_not_found, Collection, PersistenceProvider, Record,
};
