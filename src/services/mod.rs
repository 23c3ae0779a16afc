// src/services/mod.rs
pub mod chatbot;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Anything that went wrong while asking the provider for text.
///
/// The `Display` output is what callers see in the `details` field of a
/// failed chat response.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Malformed response from provider: {0}")]
    MalformedResponse(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Narrow capability: turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
