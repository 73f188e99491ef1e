//! Mock description generator for testing.
//!
//! Returns a pre-configured outcome and records the keywords it was called
//! with.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockDescriptionGenerator::with_text("We are looking for...");
//! let text = generator.generate("catering").await.into_text();
//! assert_eq!(generator.calls(), vec!["catering"]);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{DescriptionGenerator, GeneratedDescription, UnavailableReason};

#[derive(Debug, Clone)]
pub struct MockDescriptionGenerator {
    outcome: GeneratedDescription,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDescriptionGenerator {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_outcome(GeneratedDescription::Text(text.into()))
    }

    pub fn unavailable(reason: UnavailableReason) -> Self {
        Self::with_outcome(GeneratedDescription::Unavailable(reason))
    }

    pub fn with_outcome(outcome: GeneratedDescription) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Keywords received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl Default for MockDescriptionGenerator {
    fn default() -> Self {
        Self::with_text("We invite proposals for the work described in the keywords.")
    }
}

#[async_trait]
impl DescriptionGenerator for MockDescriptionGenerator {
    async fn generate(&self, keywords: &str) -> GeneratedDescription {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(keywords.to_string());
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_text_and_records_calls() {
        let generator = MockDescriptionGenerator::with_text("Draft");
        assert_eq!(
            generator.generate("web").await,
            GeneratedDescription::Text("Draft".into())
        );
        generator.generate("print").await;
        assert_eq!(generator.calls(), vec!["web", "print"]);
    }

    #[tokio::test]
    async fn can_simulate_failures() {
        let generator = MockDescriptionGenerator::unavailable(UnavailableReason::Failed);
        assert!(!generator.generate("web").await.is_available());
    }
}
