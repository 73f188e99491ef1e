//! Persistence provider port.
//!
//! A key-ordered record store with two collections. Records are JSON
//! objects with camelCase fields; the managers own their shape.
//!
//! # Design
//!
//! - **Schemaless**: the provider never interprets records beyond their id
//! - **Whole-field updates**: `update_field` replaces one top-level field
//! - **Swappable**: in-memory and file implementations share this contract

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A stored record.
pub type Record = Value;

/// The two record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Requests,
    Submissions,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Requests, Collection::Submissions];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Requests => "requests",
            Collection::Submissions => "submissions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record store shared by the request and submission managers.
#[async_trait]
pub trait PersistenceProvider: Send + Sync {
    /// All records of a collection, ordered by id.
    async fn get_all(&self, collection: Collection) -> Result<Vec<Record>, DomainError>;

    /// Returns `None` if no record has this id.
    async fn get_by_id(&self, collection: Collection, id: &str)
        -> Result<Option<Record>, DomainError>;

    /// Stores a new record under `id`.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` if `id` is already taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, collection: Collection, id: &str, record: Record)
        -> Result<(), DomainError>;

    /// Replaces one top-level field and returns the updated record.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if `id` is unknown
    /// - `CorruptRecord` if the stored record is not an object
    /// - `DatabaseError` on persistence failure
    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<Record, DomainError>;
}

/// Serialises an aggregate into a record.
pub fn encode_record<T: Serialize>(value: &T) -> Result<Record, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to encode record: {}", e))
    })
}

/// Deserialises a record into an aggregate.
pub fn decode_record<T: DeserializeOwned>(
    collection: Collection,
    record: Record,
) -> Result<T, DomainError> {
    serde_json::from_value(record).map_err(|e| {
        DomainError::new(
            ErrorCode::CorruptRecord,
            format!("Unreadable record in {}: {}", collection, e),
        )
        .with_detail("collection", collection.name())
    })
}

/// Sets `field` on an object record. Shared by provider implementations.
pub fn apply_field(
    collection: Collection,
    id: &str,
    record: &mut Record,
    field: &str,
    value: Value,
) -> Result<(), DomainError> {
    match record.as_object_mut() {
        Some(object) => {
            object.insert(field.to_string(), value);
            Ok(())
        }
        None => Err(DomainError::new(
            ErrorCode::CorruptRecord,
            format!("Record {} in {} is not an object", id, collection),
        )),
    }
}

pub fn record_not_found(collection: Collection, id: &str) -> DomainError {
    DomainError::new(
        ErrorCode::RecordNotFound,
        format!("No record {} in {}", id, collection),
    )
    .with_detail("collection", collection.name())
    .with_detail("id", id)
}

pub fn duplicate_record(collection: Collection, id: &str) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateRecord,
        format!("Record {} already exists in {}", id, collection),
    )
    .with_detail("collection", collection.name())
    .with_detail("id", id)
}

/// Loads and decodes every record of a collection.
pub async fn fetch_all<T: DeserializeOwned>(
    provider: &dyn PersistenceProvider,
    collection: Collection,
) -> Result<Vec<T>, DomainError> {
    provider
        .get_all(collection)
        .await?
        .into_iter()
        .map(|record| decode_record(collection, record))
        .collect()
}

/// Loads and decodes one record, `None` if absent.
pub async fn fetch_one<T: DeserializeOwned>(
    provider: &dyn PersistenceProvider,
    collection: Collection,
    id: &str,
) -> Result<Option<T>, DomainError> {
    provider
        .get_by_id(collection, id)
        .await?
        .map(|record| decode_record(collection, record))
        .transpose()
}
