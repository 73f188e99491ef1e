//! Blob Storage Adapters
//!
//! Implementations of the BlobStorage port.
//!
//! - **LocalBlobStorage** - Files under a root directory
//! - **InMemoryBlobStorage** - Process memory (testing/development)

mod in_memory;
mod local;

pub use in_memory::InMemoryBlobStorage;
pub use local::LocalBlobStorage;

use crate::domain::offer_submission;
use crate::ports::BlobStorageError;

/// Reduces an uploaded file name to a single safe path component.
///
/// Same rule the domain applies when validating uploads.
pub fn sanitize_file_name(raw: &str) -> Result<String, BlobStorageError> {
    offer_submission::sanitize_file_name(raw)
        .map_err(|_| BlobStorageError::InvalidFileName(raw.to_string()))
}
