pub mod openai;

use async_trait::async_trait;

use crate::{
    error::Result,
    message::llm::{ChatCompletion, ChatRequest},
};

pub use openai::OpenAiBackend;

/// A chat-style text-generation service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Called before any request is sent. Backends that need a credential
    /// return `Error::AuthenticationError` here when it is missing or unusable.
    fn check_credentials(&self) -> Result<()> {
        Ok(())
    }

    /// Performs exactly one round trip; implementations must not retry.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatCompletion>;
}

