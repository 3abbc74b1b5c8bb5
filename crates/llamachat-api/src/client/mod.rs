use anyhow::Result;
use async_trait::async_trait;

use llamachat_models::{Message, ModelConfig};

pub mod llama_cpp;
pub mod ollama;
pub mod openai;

pub use llama_cpp::LlamaCppClient;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

/// Chat backend trait - unified interface for all text-generation backends.
///
/// A backend takes the session's active configuration and an already
/// assembled message list and returns generated text. Errors stay
/// untyped (`anyhow`) here; the `ChatClient` adapter converts them at
/// the boundary.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Single blocking chat completion (non-streaming)
    async fn chat(&self, cfg: &ModelConfig, messages: Vec<Message>) -> Result<String>;

    /// Short backend name for display and logging
    fn name(&self) -> &str;
}
