//! Core data types for llamachat
//!
//! This crate provides the transcript and configuration types shared by
//! all llamachat crates, the wire structures for backend APIs, and the
//! typed error returned at the chat boundary.

pub mod error;
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use error::ChatError;
pub use requests::{ChatRequest, OllamaChatRequest, OllamaOptions};
pub use responses::{ChatResponse, Choice, OllamaChatResponse, Usage};
pub use types::{Message, ModelConfig, Role, Turn};
