use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::client::ChatBackend;
use llamachat_models::{ChatError, Message, ModelConfig, Turn};

/// Whether prior turns are resent to the backend on every call.
///
/// The corpus of front-ends this replaces was split on the question:
/// some sent the whole transcript, some only the latest message. Both
/// are valid, so it is a configuration choice here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPolicy {
    /// Resend the full transcript before the new input
    #[default]
    FullHistory,
    /// Send only the latest user message
    LatestOnly,
}

/// One generated reply plus the wall-clock latency of the backend call.
/// Latency is recorded for display only.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub latency: Duration,
}

/// Thin adapter between the session and a chat backend.
///
/// Stateless per call: the transcript is supplied by the caller. Every
/// backend failure is converted into [`ChatError::BackendFailure`]
/// here; nothing propagates past this boundary.
pub struct ChatClient {
    backend: Arc<dyn ChatBackend>,
    history_policy: HistoryPolicy,
}

impl ChatClient {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            history_policy: HistoryPolicy::default(),
        }
    }

    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.history_policy = policy;
        self
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        self.history_policy
    }

    /// Short name of the underlying backend, for display
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Send one user message and return the generated text.
    ///
    /// Blank input is rejected before any backend call. The message
    /// list is assembled from the config's system prompt, the prior
    /// turns (per history policy) and the new input, in that order.
    pub async fn respond(
        &self,
        cfg: &ModelConfig,
        history: &[Turn],
        input: &str,
    ) -> Result<ChatReply, ChatError> {
        if input.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let messages = self.build_messages(cfg, history, input);

        let started = Instant::now();
        let text = self
            .backend
            .chat(cfg, messages)
            .await
            .map_err(ChatError::backend)?;

        Ok(ChatReply {
            text,
            latency: started.elapsed(),
        })
    }

    fn build_messages(&self, cfg: &ModelConfig, history: &[Turn], input: &str) -> Vec<Message> {
        let mut messages = Vec::new();

        if let Some(system_prompt) = &cfg.system_prompt {
            messages.push(Message::system(system_prompt.clone()));
        }

        if self.history_policy == HistoryPolicy::FullHistory {
            messages.extend(history.iter().map(Message::from));
        }

        messages.push(Message::user(input));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChatClient {
        // build_messages never touches the backend, a dead URL is fine
        let backend = Arc::new(crate::client::OllamaClient::new(
            "http://localhost:11434".to_string(),
        ));
        ChatClient::new(backend)
    }

    #[test]
    fn test_build_messages_full_history() {
        let history = vec![Turn::user("hi"), Turn::assistant("hello")];
        let cfg = ModelConfig::default();

        let messages = client().build_messages(&cfg, &history, "how are you?");
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "assistant", "user"]);
        assert_eq!(messages.last().unwrap().content, "how are you?");
    }

    #[test]
    fn test_build_messages_latest_only() {
        let history = vec![Turn::user("hi"), Turn::assistant("hello")];
        let cfg = ModelConfig::default();

        let messages = client()
            .with_history_policy(HistoryPolicy::LatestOnly)
            .build_messages(&cfg, &history, "how are you?");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "how are you?");
    }

    #[test]
    fn test_build_messages_system_prompt_first() {
        let cfg = ModelConfig {
            system_prompt: Some("You are a helpful assistant.".to_string()),
            ..ModelConfig::default()
        };

        let messages = client().build_messages(&cfg, &[], "hi");
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }
}
