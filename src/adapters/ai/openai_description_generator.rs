//! OpenAI-compatible description generator.
//!
//! Posts a single non-streaming chat completion and maps every failure to an
//! [`UnavailableReason`]. Works against any endpoint speaking the
//! `/chat/completions` dialect.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIDescriptionConfig::new(Some(api_key))
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let generator = OpenAIDescriptionGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{description_prompt, DescriptionGenerator, GeneratedDescription, UnavailableReason};

/// Configuration for the OpenAI description generator.
#[derive(Debug, Clone)]
pub struct OpenAIDescriptionConfig {
    /// `None` leaves the generator unconfigured; every call degrades.
    api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIDescriptionConfig {
    pub fn new(api_key: Option<Secret<String>>) -> Self {
        Self {
            api_key,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .map(|key| !key.expose_secret().trim().is_empty())
            .unwrap_or(false)
    }
}

/// Description generator backed by an OpenAI-compatible API.
pub struct OpenAIDescriptionGenerator {
    config: OpenAIDescriptionConfig,
    client: Client,
}

impl OpenAIDescriptionGenerator {
    pub fn new(config: OpenAIDescriptionConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "HTTP client builder failed, using defaults");
                Client::new()
            });

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_request(&self, keywords: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: description_prompt(keywords),
            }],
        }
    }

    async fn request(&self, api_key: &str, keywords: &str) -> Result<String, UnavailableReason> {
        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&self.to_request(keywords))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, timeout = e.is_timeout(), "description request failed");
                UnavailableReason::Failed
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "description provider returned an error");
            return Err(classify_error(status.as_u16(), &body));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "description response was not understood");
            UnavailableReason::Failed
        })?;

        extract_text(parsed).ok_or(UnavailableReason::EmptyResponse)
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAIDescriptionGenerator {
    async fn generate(&self, keywords: &str) -> GeneratedDescription {
        let api_key = match &self.config.api_key {
            Some(key) if self.config.is_configured() => key,
            _ => return GeneratedDescription::Unavailable(UnavailableReason::NotConfigured),
        };

        match self.request(api_key.expose_secret(), keywords).await {
            Ok(text) => GeneratedDescription::Text(text),
            Err(reason) => GeneratedDescription::Unavailable(reason),
        }
    }
}

/// Maps a failed HTTP exchange to the placeholder shown to the user.
fn classify_error(status: u16, body: &str) -> UnavailableReason {
    let body = body.to_ascii_lowercase();
    let key_rejected = body.contains("api key not valid")
        || body.contains("invalid_api_key")
        || body.contains("incorrect api key");

    match status {
        401 | 403 => UnavailableReason::InvalidApiKey,
        400 if key_rejected => UnavailableReason::InvalidApiKey,
        _ => UnavailableReason::Failed,
    }
}

fn extract_text(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
