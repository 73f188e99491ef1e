use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::generate_short_id;
use crate::domain::offer_submission::LocationRef;
use crate::ports::{BlobStorage, BlobStorageError};

use super::sanitize_file_name;

/// In-memory blob store. Refs look like `memory://{short-id}/{name}`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStorage {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStorage for InMemoryBlobStorage {
    async fn store(&self, bytes: Vec<u8>, file_name: &str) -> Result<LocationRef, BlobStorageError> {
        let name = sanitize_file_name(file_name)?;
        let location = format!("memory://{}/{}", generate_short_id(), name);
        self.blobs.write().await.insert(location.clone(), bytes);
        Ok(LocationRef::new(location))
    }

    async fn resolve(&self, location: &LocationRef) -> Result<Vec<u8>, BlobStorageError> {
        self.blobs
            .read()
            .await
            .get(location.as_str())
            .cloned()
            .ok_or_else(|| BlobStorageError::NotFound(location.to_string()))
    }

    async fn delete(&self, location: &LocationRef) -> Result<(), BlobStorageError> {
        self.blobs
            .write()
            .await
            .remove(location.as_str())
            .map(|_| ())
            .ok_or_else(|| BlobStorageError::NotFound(location.to_string()))
    }
}
