//! In-Memory Persistence Adapter
//!
//! Keeps both collections in process memory. Used for tests, demos and the
//! no-backend deployment.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{
    apply_field, duplicate_record, record_not_found, Collection, PersistenceProvider, Record,
};

type Table = Arc<RwLock<BTreeMap<String, Record>>>;

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    requests: Table,
    submissions: Table,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, collection: Collection) -> &Table {
        match collection {
            Collection::Requests => &self.requests,
            Collection::Submissions => &self.submissions,
        }
    }

    /// Number of records in a collection
    pub async fn count(&self, collection: Collection) -> usize {
        self.table(collection).read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.requests.write().await.clear();
        self.submissions.write().await.clear();
    }
}

#[async_trait]
impl PersistenceProvider for InMemoryPersistence {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Record>, DomainError> {
        let table = self.table(collection).read().await;
        Ok(table.values().cloned().collect())
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Record>, DomainError> {
        let table = self.table(collection).read().await;
        Ok(table.get(id).cloned())
    }

    async fn insert(
        &self,
        collection: Collection,
        id: &str,
        record: Record,
    ) -> Result<(), DomainError> {
        let mut table = self.table(collection).write().await;
        if table.contains_key(id) {
            return Err(duplicate_record(collection, id));
        }
        table.insert(id.to_string(), record);
        tracing::debug!(%collection, id, "record inserted");
        Ok(())
    }

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<Record, DomainError> {
        let mut table = self.table(collection).write().await;
        let record = table
            .get_mut(id)
            .ok_or_else(|| record_not_found(collection, id))?;
        apply_field(collection, id, record, field, value)?;
        tracing::debug!(%collection, id, field, "record field updated");
        Ok(record.clone())
    }
}
