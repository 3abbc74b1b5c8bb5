use serde::{Deserialize, Serialize};

use super::types::{Message, ModelConfig};

/// Chat API request structure (OpenAI-compatible endpoints)
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stop: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatRequest {
    pub fn from_config(cfg: &ModelConfig, messages: Vec<Message>) -> Self {
        Self {
            model: cfg.model_name.clone(),
            messages,
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
            top_p: cfg.top_p,
            stop: cfg.stop.clone(),
            stream: None,
        }
    }
}

/// Chat request structure for the Ollama daemon (`/api/chat`)
#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
    pub options: OllamaOptions,
}

/// Sampling options within an Ollama chat request. Ollama calls the
/// generation limit `num_predict` rather than `max_tokens`.
#[derive(Debug, Serialize, Deserialize)]
pub struct OllamaOptions {
    pub temperature: f32,
    pub num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub stop: Vec<String>,
}

impl OllamaChatRequest {
    pub fn from_config(cfg: &ModelConfig, messages: Vec<Message>) -> Self {
        Self {
            model: cfg.model_name.clone(),
            messages,
            stream: false,
            options: OllamaOptions {
                temperature: cfg.temperature,
                num_predict: cfg.max_tokens,
                top_p: cfg.top_p,
                stop: cfg.stop.clone(),
            },
        }
    }
}
