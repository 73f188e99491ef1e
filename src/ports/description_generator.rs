//! Description generator port.
//!
//! Drafts a request description from keywords. Generation never fails at
//! this boundary: provider problems degrade to a placeholder text.

use async_trait::async_trait;

pub const PLACEHOLDER_NOT_CONFIGURED: &str =
    "API Key not configured. Cannot generate description.";
pub const PLACEHOLDER_INVALID_API_KEY: &str =
    "Error: The provided API Key is not valid. Please check your configuration.";
pub const PLACEHOLDER_EMPTY: &str = "No description generated.";
pub const PLACEHOLDER_FAILED: &str = "Failed to generate description. Please try again later.";

/// Why no description could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    NotConfigured,
    InvalidApiKey,
    EmptyResponse,
    Failed,
}

impl UnavailableReason {
    pub fn placeholder(&self) -> &'static str {
        match self {
            UnavailableReason::NotConfigured => PLACEHOLDER_NOT_CONFIGURED,
            UnavailableReason::InvalidApiKey => PLACEHOLDER_INVALID_API_KEY,
            UnavailableReason::EmptyResponse => PLACEHOLDER_EMPTY,
            UnavailableReason::Failed => PLACEHOLDER_FAILED,
        }
    }
}

/// Outcome of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedDescription {
    Text(String),
    Unavailable(UnavailableReason),
}

impl GeneratedDescription {
    pub fn is_available(&self) -> bool {
        matches!(self, GeneratedDescription::Text(_))
    }

    /// The generated text, or the placeholder for the failure.
    pub fn into_text(self) -> String {
        match self {
            GeneratedDescription::Text(text) => text,
            GeneratedDescription::Unavailable(reason) => reason.placeholder().to_string(),
        }
    }
}

#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(&self, keywords: &str) -> GeneratedDescription;
}

/// Prompt sent to text-generation providers.
pub fn description_prompt(keywords: &str) -> String {
    format!(
        "Draft a professional and compelling offer request description based on these \
         keywords: \"{}\". The description should clearly state the need and invite detailed \
         proposals. Keep it concise yet comprehensive, around 100-150 words.",
        keywords.trim()
    )
}
