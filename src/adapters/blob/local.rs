//! Local filesystem blob storage.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::generate_short_id;
use crate::domain::offer_submission::LocationRef;
use crate::ports::{BlobStorage, BlobStorageError};

use super::sanitize_file_name;

/// Stores attachments as plain files.
///
/// # Directory Structure
///
/// ```text
/// {root}/
/// ├── 0k3j5h2m9q1a/
/// │   └── quote.pdf
/// └── 7zx0c4v8b2n6/
///     └── quote.pdf
/// ```
///
/// The location ref is the path relative to `root`, e.g. `0k3j5h2m9q1a/quote.pdf`.
#[derive(Debug, Clone)]
pub struct LocalBlobStorage {
    root: PathBuf,
}

impl LocalBlobStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a ref back to a path, refusing anything that leaves `root`.
    fn path_for(&self, location: &LocationRef) -> Result<PathBuf, BlobStorageError> {
        let relative = Path::new(location.as_str());
        let contained = !location.as_str().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !contained {
            return Err(BlobStorageError::NotFound(location.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStorage for LocalBlobStorage {
    async fn store(&self, bytes: Vec<u8>, file_name: &str) -> Result<LocationRef, BlobStorageError> {
        let name = sanitize_file_name(file_name)?;
        let bucket = generate_short_id();
        let dir = self.root.join(&bucket);

        fs::create_dir_all(&dir).await.map_err(|e| {
            BlobStorageError::Io(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = dir.join(&name);
        fs::write(&path, &bytes).await.map_err(|e| {
            BlobStorageError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "blob stored");
        Ok(LocationRef::new(format!("{}/{}", bucket, name)))
    }

    async fn resolve(&self, location: &LocationRef) -> Result<Vec<u8>, BlobStorageError> {
        let path = self.path_for(location)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BlobStorageError::NotFound(location.to_string()))
            }
            Err(e) => Err(BlobStorageError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn delete(&self, location: &LocationRef) -> Result<(), BlobStorageError> {
        let path = self.path_for(location)?;
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BlobStorageError::NotFound(location.to_string()));
            }
            Err(e) => {
                return Err(BlobStorageError::Io(format!(
                    "Failed to delete {}: {}",
                    path.display(),
                    e
                )));
            }
        }

        // Buckets hold one file each; a non-empty bucket is left alone.
        if let Some(bucket) = path.parent().filter(|dir| *dir != self.root) {
            let _ = fs::remove_dir(bucket).await;
        }

        tracing::debug!(path = %path.display(), "blob deleted");
        Ok(())
    }
}
