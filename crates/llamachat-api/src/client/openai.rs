use anyhow::Result;
use async_trait::async_trait;

use crate::client::ChatBackend;
use crate::config::normalize_api_url;
use llamachat_logging::{log_request, log_request_to_file};
use llamachat_models::{ChatRequest, ChatResponse, Message, ModelConfig};

/// Client for OpenAI-compatible hosted chat-completion APIs
pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    verbose: bool,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url: normalize_api_url(&api_url),
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    /// Dump outgoing requests to the console
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn chat(&self, cfg: &ModelConfig, messages: Vec<Message>) -> Result<String> {
        let request = ChatRequest::from_config(cfg, messages);

        log_request(&self.api_url, &request, Some(&self.api_key), self.verbose);
        // Log request to file for persistent debugging
        let _ = log_request_to_file(
            &self.api_url,
            &request,
            &cfg.model_name,
            Some(&self.api_key),
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API request failed: {} - {}",
                status,
                error_text
            ));
        }

        let response_text = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;

        match chat_response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.trim().to_string()),
            None => Err(anyhow::anyhow!("No choices in response")),
        }
    }

    fn name(&self) -> &str {
        "openai"
    }
}
