//! Invitation link configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationConfig {
    /// Origin the submission links point at, e.g. `https://offers.example.com`
    #[serde(default = "default_base_origin")]
    pub base_origin: String,
}

impl InvitationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let origin = self.base_origin.trim();
        let host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.trim_end_matches('/').is_empty() => Ok(()),
            _ => Err(ValidationError::InvalidBaseOrigin),
        }
    }
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            base_origin: default_base_origin(),
        }
    }
}

fn default_base_origin() -> String {
    "http://localhost:5173".to_string()
}
