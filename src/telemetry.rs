//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter. Development gets pretty,
//! human-oriented output; every other environment logs JSON lines.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::RuntimeConfig;

/// Build the filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &RuntimeConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing(config: &RuntimeConfig) -> Result<(), TryInitError> {
    let filter = env_filter(config);
    let development = !config.json_logs();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(development)
        .with_line_number(development);

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .try_init()?;
    }

    tracing::info!(environment = ?config.environment, "tracing initialized");
    Ok(())
}
