//! GenerateDescriptionHandler - drafts a request description from keywords.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::offer_request::OfferRequestError;
use crate::ports::DescriptionGenerator;

#[derive(Debug, Clone)]
pub struct GenerateDescriptionCommand {
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDescriptionResult {
    /// Generated text, or a placeholder explaining why there is none.
    pub description: String,
    pub generated: bool,
}

pub struct GenerateDescriptionHandler {
    generator: Arc<dyn DescriptionGenerator>,
}

impl GenerateDescriptionHandler {
    pub fn new(generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self { generator }
    }

    /// Only blank keywords fail; provider problems come back as placeholder text.
    pub async fn handle(
        &self,
        cmd: GenerateDescriptionCommand,
    ) -> Result<GenerateDescriptionResult, OfferRequestError> {
        let keywords = cmd.keywords.trim();
        if keywords.is_empty() {
            return Err(ValidationError::empty_field("keywords").into());
        }

        let outcome = self.generator.generate(keywords).await;
        let generated = outcome.is_available();
        if !generated {
            tracing::warn!(?outcome, "description generation degraded to placeholder");
        }

        Ok(GenerateDescriptionResult {
            description: outcome.into_text(),
            generated,
        })
    }
}
