use clap::Parser;

use llamachat_api::BackendType;
use llamachat_models::ModelConfig;

/// CLI arguments for llamachat
#[derive(Parser)]
#[command(name = "llamachat")]
#[command(about = "Chat with a language model from the terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Question for one-shot mode; omit to start the interactive REPL
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Backend to talk to (ollama, openai, llama.cpp)
    #[arg(long, default_value = "ollama", value_name = "BACKEND")]
    pub backend: String,

    /// Custom API URL (required for llama.cpp, e.g. http://localhost:8080)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key for hosted backends; falls back to OPENAI_API_KEY
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model name override
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature in [0, 1]
    #[arg(long, value_name = "FLOAT")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Nucleus sampling top-p
    #[arg(long, value_name = "FLOAT")]
    pub top_p: Option<f32>,

    /// System prompt sent before the conversation
    #[arg(long, value_name = "TEXT")]
    pub system: Option<String>,

    /// Send only the latest message instead of the full transcript
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub latest_only: bool,

    /// Dump outgoing HTTP requests to the console
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    /// Build the initial session config from the flags, starting from
    /// the backend's customary default model.
    pub fn model_config(&self, backend: BackendType) -> ModelConfig {
        let mut cfg = ModelConfig::default();

        if backend == BackendType::OpenAi {
            cfg.model_name = "gpt-4".to_string();
        }
        if let Some(model) = &self.model {
            cfg.model_name = model.clone();
        }
        if let Some(temperature) = self.temperature {
            cfg.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            cfg.max_tokens = max_tokens;
        }
        cfg.top_p = self.top_p;
        cfg.system_prompt = self.system.clone();

        cfg
    }
}
