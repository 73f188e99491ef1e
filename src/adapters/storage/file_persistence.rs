//! File-based Persistence Adapter
//!
//! Stores each collection as one YAML document (`requests.yaml`,
//! `submissions.yaml`) keyed by record id. Writes go to a temp file that is
//! renamed over the original, so readers never see a half-written file.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{
    apply_field, duplicate_record, record_not_found, Collection, PersistenceProvider, Record,
};

type Table = BTreeMap<String, Record>;

/// YAML file record store
#[derive(Debug)]
pub struct FilePersistence {
    data_dir: PathBuf,
    // Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FilePersistence {
    /// Create a store rooted at `data_dir`. The directory is created on
    /// first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FilePersistence::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn file_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.yaml", collection.name()))
    }

    async fn load(&self, collection: Collection) -> Result<Table, DomainError> {
        let path = self.file_path(collection);
        if !path.exists() {
            return Ok(Table::new());
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| io_error(&path, e))?;
        if yaml.trim().is_empty() {
            return Ok(Table::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::CorruptRecord,
                format!("Failed to parse {}: {}", path.display(), e),
            )
            .with_detail("collection", collection.name())
        })
    }

    async fn save(&self, collection: Collection, table: &Table) -> Result<(), DomainError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| io_error(&self.data_dir, e))?;

        let yaml = serde_yaml::to_string(table).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize {}: {}", collection, e),
            )
        })?;

        let path = self.file_path(collection);
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml).await.map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::debug!(%collection, records = table.len(), path = %path.display(), "collection saved");
        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("IO error on {}: {}", path.display(), err),
    )
}

#[async_trait]
impl PersistenceProvider for FilePersistence {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Record>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.load(collection).await?.into_values().collect())
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Record>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.load(collection).await?.remove(id))
    }

    async fn insert(
        &self,
        collection: Collection,
        id: &str,
        record: Record,
    ) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut table = self.load(collection).await?;
        if table.contains_key(id) {
            return Err(duplicate_record(collection, id));
        }
        table.insert(id.to_string(), record);
        self.save(collection, &table).await
    }

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<Record, DomainError> {
        let _guard = self.lock.lock().await;
        let mut table = self.load(collection).await?;
        let record = table
            .get_mut(id)
            .ok_or_else(|| record_not_found(collection, id))?;
        apply_field(collection, id, record, field, value)?;
        let updated = record.clone();
        self.save(collection, &table).await?;
        Ok(updated)
    }
}
