//! Composition root.
//!
//! Selects one adapter per port from [`AppConfig`] at process start and hands
//! out handlers wired against the shared ports.

use std::sync::Arc;

use crate::adapters::{
    FilePersistence, InMemoryBlobStorage, InMemoryPersistence, LocalBlobStorage,
    LoggingNotifier, OpenAIDescriptionConfig, OpenAIDescriptionGenerator,
};
use crate::application::{
    CreateOfferRequestHandler, GenerateDescriptionHandler, GetDashboardHandler,
    GetOfferRequestHandler, GetSubmissionHandler, ListOfferRequestsHandler,
    ListSubmissionsForRequestHandler, ResolveAttachmentHandler, SubmitOfferHandler,
    UpdateOfferRequestStatusHandler, UpdateSubmissionStatusHandler,
};
use crate::config::{AiConfig, AppConfig, BlobBackend, ConfigError, StorageBackend};
use crate::domain::offer_request::InvitationLinkBuilder;
use crate::ports::{BlobStorage, DescriptionGenerator, InvitationNotifier, PersistenceProvider};

/// Shared ports for the offer desk.
#[derive(Clone)]
pub struct OfferDeskServices {
    pub persistence: Arc<dyn PersistenceProvider>,
    pub blobs: Arc<dyn BlobStorage>,
    pub notifier: Arc<dyn InvitationNotifier>,
    pub generator: Arc<dyn DescriptionGenerator>,
    pub links: InvitationLinkBuilder,
}

impl OfferDeskServices {
    pub fn new(
        persistence: Arc<dyn PersistenceProvider>,
        blobs: Arc<dyn BlobStorage>,
        notifier: Arc<dyn InvitationNotifier>,
        generator: Arc<dyn DescriptionGenerator>,
        links: InvitationLinkBuilder,
    ) -> Self {
        Self {
            persistence,
            blobs,
            notifier,
            generator,
            links,
        }
    }

    /// Validate `config` and build the configured adapters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` for an invalid configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let persistence: Arc<dyn PersistenceProvider> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryPersistence::new()),
            StorageBackend::File => Arc::new(FilePersistence::new(&config.storage.data_dir)),
        };

        let blobs: Arc<dyn BlobStorage> = match config.blobs.backend {
            BlobBackend::Memory => Arc::new(InMemoryBlobStorage::new()),
            BlobBackend::Local => Arc::new(LocalBlobStorage::new(&config.blobs.root_dir)),
        };

        if !config.ai.has_api_key() {
            tracing::warn!("no AI API key configured, description generation will degrade");
        }

        tracing::info!(
            storage = ?config.storage.backend,
            blobs = ?config.blobs.backend,
            origin = %config.invitations.base_origin,
            "offer desk services configured"
        );

        Ok(Self::new(
            persistence,
            blobs,
            Arc::new(LoggingNotifier::new()),
            Arc::new(description_generator(&config.ai)),
            InvitationLinkBuilder::new(config.invitations.base_origin.trim()),
        ))
    }

    pub fn create_offer_request_handler(&self) -> CreateOfferRequestHandler {
        CreateOfferRequestHandler::new(
            self.persistence.clone(),
            self.notifier.clone(),
            self.links.clone(),
        )
    }

    pub fn get_offer_request_handler(&self) -> GetOfferRequestHandler {
        GetOfferRequestHandler::new(self.persistence.clone())
    }

    pub fn list_offer_requests_handler(&self) -> ListOfferRequestsHandler {
        ListOfferRequestsHandler::new(self.persistence.clone())
    }

    pub fn update_offer_request_status_handler(&self) -> UpdateOfferRequestStatusHandler {
        UpdateOfferRequestStatusHandler::new(self.persistence.clone())
    }

    pub fn generate_description_handler(&self) -> GenerateDescriptionHandler {
        GenerateDescriptionHandler::new(self.generator.clone())
    }

    pub fn submit_offer_handler(&self) -> SubmitOfferHandler {
        SubmitOfferHandler::new(self.persistence.clone(), self.blobs.clone())
    }

    pub fn get_submission_handler(&self) -> GetSubmissionHandler {
        GetSubmissionHandler::new(self.persistence.clone())
    }

    pub fn list_submissions_for_request_handler(&self) -> ListSubmissionsForRequestHandler {
        ListSubmissionsForRequestHandler::new(self.persistence.clone())
    }

    pub fn update_submission_status_handler(&self) -> UpdateSubmissionStatusHandler {
        UpdateSubmissionStatusHandler::new(self.persistence.clone())
    }

    pub fn resolve_attachment_handler(&self) -> ResolveAttachmentHandler {
        ResolveAttachmentHandler::new(self.persistence.clone(), self.blobs.clone())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.persistence.clone())
    }
}

fn description_generator(ai: &AiConfig) -> OpenAIDescriptionGenerator {
    let config = OpenAIDescriptionConfig::new(ai.api_key.clone())
        .with_model(ai.model.clone())
        .with_base_url(ai.base_url.clone())
        .with_timeout(ai.timeout());
    OpenAIDescriptionGenerator::new(config)
}
