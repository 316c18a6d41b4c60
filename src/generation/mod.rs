//! Text generation behind a narrow interface

mod gemini;
pub mod settings;

pub use gemini::GeminiClient;
pub use settings::{GenerationSettings, SettingsOverrides, SUPPORTED_MODELS};

use crate::error::GenerationError;

/// Anything that turns a prompt into text
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Model name, reported alongside the output
    fn model(&self) -> &str;
}
