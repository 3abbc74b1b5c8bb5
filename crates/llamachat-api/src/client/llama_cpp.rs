use anyhow::Result;
use async_trait::async_trait;

use crate::client::ChatBackend;
use llamachat_logging::{log_request, log_request_to_file};
use llamachat_models::{ChatRequest, ChatResponse, Message, ModelConfig};

/// llama.cpp server client with OpenAI-compatible API.
///
/// Runs against a self-hosted server without authentication. The stop
/// tokens in the config (e.g. `<|eot_id|>` for Llama 3 instruct models)
/// are forwarded as-is.
pub struct LlamaCppClient {
    base_url: String,
    verbose: bool,
    client: reqwest::Client,
}

impl LlamaCppClient {
    pub fn new(base_url: String) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    /// Dump outgoing requests to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn get_chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for LlamaCppClient {
    async fn chat(&self, cfg: &ModelConfig, messages: Vec<Message>) -> Result<String> {
        let request = ChatRequest::from_config(cfg, messages);

        log_request(
            &self.get_chat_completions_url(),
            &request,
            None,
            self.verbose,
        );
        // Log request to file for persistent debugging
        let _ = log_request_to_file(
            &self.get_chat_completions_url(),
            &request,
            &cfg.model_name,
            None,
        );

        let response = self
            .client
            .post(self.get_chat_completions_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "llama.cpp API error: {} - {}",
                status,
                error_text
            ));
        }

        let response_text = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;

        match chat_response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(anyhow::anyhow!("No choices in response")),
        }
    }

    fn name(&self) -> &str {
        "llama.cpp"
    }
}
