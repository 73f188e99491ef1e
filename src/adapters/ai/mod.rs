//! Description Generator Adapters.
//!
//! ## Available Adapters
//!
//! - `MockDescriptionGenerator` - Configurable mock for testing
//! - `OpenAIDescriptionGenerator` - OpenAI-compatible chat completions

mod mock_description_generator;
mod openai_description_generator;

pub use mock_description_generator::MockDescriptionGenerator;
pub use openai_description_generator::{OpenAIDescriptionConfig, OpenAIDescriptionGenerator};
