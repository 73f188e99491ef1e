//! Offer desk settings.
//!
//! Values come from `OFFER_DESK__*` environment variables (a `.env` file is
//! honoured in development). Sections nest with `__`, and every field has a
//! default, so an empty environment starts fully in memory.
//!
//! ```no_run
//! use offer_desk::config::AppConfig;
//!
//! let settings = AppConfig::load()?;
//! settings.validate()?;
//! # Ok::<(), offer_desk::config::ConfigError>(())
//! ```

mod ai;
mod error;
mod invitations;
mod runtime;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use invitations::InvitationConfig;
pub use runtime::{Environment, RuntimeConfig};
pub use storage::{BlobBackend, BlobConfig, StorageBackend, StorageConfig};

use serde::Deserialize;

/// All configuration sections, see [`AppConfig::load`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and log filter
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Persistence provider selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Attachment storage selection
    #[serde(default)]
    pub blobs: BlobConfig,

    /// Submission link origin
    #[serde(default)]
    pub invitations: InvitationConfig,

    /// Description generator provider
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Read settings from the process environment.
    ///
    /// `OFFER_DESK__STORAGE__BACKEND=file` sets `storage.backend`,
    /// `OFFER_DESK__AI__API_KEY=...` sets `ai.api_key`, and so on.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not parse, e.g. an unknown backend.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env file loaded");
        }

        let settings = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("OFFER_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Check every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.storage.validate()?;
        self.blobs.validate()?;
        self.invitations.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
