//! # llamachat-api
//!
//! A unified interface for chat text generation across multiple backends:
//! - Ollama (local daemon)
//! - OpenAI-compatible hosted APIs
//! - llama.cpp (self-hosted server)
//!
//! One backend is chosen per deployment at construction time; there is
//! no runtime negotiation, no retries and no streaming. The `ChatClient`
//! adapter sits on top of a backend and converts every failure into a
//! typed [`ChatError`](llamachat_models::ChatError) so callers only ever
//! have to display a message.
//!
//! ## Example
//!
//! ```rust,no_run
//! use llamachat_api::{BackendType, ChatClient, ClientFactory};
//! use llamachat_models::ModelConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = ClientFactory::create(BackendType::Ollama, None, None)?;
//!     let client = ChatClient::new(backend);
//!
//!     let cfg = ModelConfig::default();
//!     let reply = client.respond(&cfg, &[], "Hello!").await?;
//!     println!("{} ({:?})", reply.text, reply.latency);
//!
//!     Ok(())
//! }
//! ```

pub mod chat_client;
pub mod client;
pub mod config;

// Re-export commonly used types
pub use chat_client::{ChatClient, ChatReply, HistoryPolicy};
pub use client::{ChatBackend, LlamaCppClient, OllamaClient, OpenAiClient};
pub use config::{
    get_default_url_for_backend, normalize_api_url, BackendType, ClientFactory, OLLAMA_API_URL,
    OPENAI_API_URL,
};
