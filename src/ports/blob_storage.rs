//! BlobStorage port for attachment bytes.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::offer_submission::LocationRef;

/// Errors that can occur during blob storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStorageError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<BlobStorageError> for DomainError {
    fn from(err: BlobStorageError) -> Self {
        let code = match &err {
            BlobStorageError::NotFound(_) => ErrorCode::AttachmentNotFound,
            BlobStorageError::InvalidFileName(_) => ErrorCode::ValidationFailed,
            BlobStorageError::Io(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Stores uploaded files and hands back opaque location refs.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores `bytes` and returns where they can be found again.
    ///
    /// Two stores of the same name never collide.
    async fn store(&self, bytes: Vec<u8>, file_name: &str) -> Result<LocationRef, BlobStorageError>;

    /// Reads back stored bytes.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the ref was never issued or its blob is gone
    async fn resolve(&self, location: &LocationRef) -> Result<Vec<u8>, BlobStorageError>;

    /// Removes a stored blob. Used to discard uploads of a failed submission.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing is stored under the ref
    async fn delete(&self, location: &LocationRef) -> Result<(), BlobStorageError>;
}
