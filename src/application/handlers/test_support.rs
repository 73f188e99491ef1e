//! Shared fixtures for handler tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::{InMemoryBlobStorage, InMemoryPersistence, RecordingNotifier};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::offer_request::{
    CompanyInput, InvitationLinkBuilder, NewOfferRequest, OfferRequest,
};
use crate::domain::offer_submission::{LocationRef, NewOfferSubmission, UploadedFile};
use crate::ports::{
    encode_record, BlobStorage, BlobStorageError, Collection, PersistenceProvider, Record,
};

pub const ORIGIN: &str = "https://offers.example.com";

/// Persistence provider whose every call fails.
pub struct FailingPersistence;

fn simulated() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated storage failure")
}

#[async_trait]
impl PersistenceProvider for FailingPersistence {
    async fn get_all(&self, _collection: Collection) -> Result<Vec<Record>, DomainError> {
        Err(simulated())
    }

    async fn get_by_id(
        &self,
        _collection: Collection,
        _id: &str,
    ) -> Result<Option<Record>, DomainError> {
        Err(simulated())
    }

    async fn insert(
        &self,
        _collection: Collection,
        _id: &str,
        _record: Record,
    ) -> Result<(), DomainError> {
        Err(simulated())
    }

    async fn update_field(
        &self,
        _collection: Collection,
        _id: &str,
        _field: &str,
        _value: Value,
    ) -> Result<Record, DomainError> {
        Err(simulated())
    }
}

/// Reads from an in-memory store but refuses every insert.
pub struct InsertFailingPersistence {
    inner: Arc<InMemoryPersistence>,
}

impl InsertFailingPersistence {
    pub fn new(inner: Arc<InMemoryPersistence>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PersistenceProvider for InsertFailingPersistence {
    async fn get_all(&self, collection: Collection) -> Result<Vec<Record>, DomainError> {
        self.inner.get_all(collection).await
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Record>, DomainError> {
        self.inner.get_by_id(collection, id).await
    }

    async fn insert(
        &self,
        _collection: Collection,
        _id: &str,
        _record: Record,
    ) -> Result<(), DomainError> {
        Err(simulated())
    }

    async fn update_field(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<Record, DomainError> {
        self.inner.update_field(collection, id, field, value).await
    }
}

/// In-memory blob store that fails to store one particular file name.
pub struct FailingBlobStorage {
    inner: Arc<InMemoryBlobStorage>,
    fail_on: String,
}

impl FailingBlobStorage {
    pub fn new(inner: Arc<InMemoryBlobStorage>, fail_on: impl Into<String>) -> Self {
        Self {
            inner,
            fail_on: fail_on.into(),
        }
    }
}

#[async_trait]
impl BlobStorage for FailingBlobStorage {
    async fn store(&self, bytes: Vec<u8>, file_name: &str) -> Result<LocationRef, BlobStorageError> {
        if file_name == self.fail_on {
            return Err(BlobStorageError::Io("Simulated disk failure".to_string()));
        }
        self.inner.store(bytes, file_name).await
    }

    async fn resolve(&self, location: &LocationRef) -> Result<Vec<u8>, BlobStorageError> {
        self.inner.resolve(location).await
    }

    async fn delete(&self, location: &LocationRef) -> Result<(), BlobStorageError> {
        self.inner.delete(location).await
    }
}

pub struct Fixture {
    pub store: Arc<InMemoryPersistence>,
    pub blobs: Arc<InMemoryBlobStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub links: InvitationLinkBuilder,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_notifier(RecordingNotifier::new())
    }

    pub fn with_notifier(notifier: RecordingNotifier) -> Self {
        Self {
            store: Arc::new(InMemoryPersistence::new()),
            blobs: Arc::new(InMemoryBlobStorage::new()),
            notifier: Arc::new(notifier),
            links: InvitationLinkBuilder::new(ORIGIN),
        }
    }

    /// Stores a request directly, bypassing the create handler.
    pub async fn seed_request(&self, request: &OfferRequest) {
        self.store
            .insert(
                Collection::Requests,
                request.id().as_str(),
                encode_record(request).unwrap(),
            )
            .await
            .unwrap();
    }
}

pub fn days_from_today(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn new_request_input(companies: &[(&str, &str)]) -> NewOfferRequest {
    NewOfferRequest {
        title: "Website Redesign".to_string(),
        description: "Rebuild the public site".to_string(),
        keywords: "web, design".to_string(),
        requirements: "Responsive, accessible".to_string(),
        due_date: days_from_today(1),
        companies: companies
            .iter()
            .map(|(name, email)| CompanyInput::new(*name, *email))
            .collect(),
    }
}

pub fn request_created_at(created_at: Timestamp) -> OfferRequest {
    OfferRequest::new(new_request_input(&[("Acme", "a@acme.com")]), created_at).unwrap()
}

pub fn offer_from(company: &str) -> NewOfferSubmission {
    NewOfferSubmission {
        company_name: company.to_string(),
        contact_person: "Pat Doe".to_string(),
        contact_email: "pat@acme.com".to_string(),
        offer_details: "Six week delivery".to_string(),
        pricing: "EUR 12,000".to_string(),
    }
}

pub fn files(n: usize) -> Vec<UploadedFile> {
    (0..n)
        .map(|i| UploadedFile::new(format!("doc-{i}.pdf"), "application/pdf", vec![i as u8; 16]))
        .collect()
}
