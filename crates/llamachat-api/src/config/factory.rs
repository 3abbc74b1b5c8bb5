use std::env;
use std::sync::Arc;

use crate::client::{ChatBackend, LlamaCppClient, OllamaClient, OpenAiClient};
use crate::config::{BackendType, OLLAMA_API_URL, OPENAI_API_URL};
use llamachat_models::ChatError;

/// Client factory for creating chat backends.
///
/// One backend per deployment, constructed up front and handed to the
/// caller - no memoized singletons keyed by arguments.
pub struct ClientFactory;

impl ClientFactory {
    /// Create a chat backend of the specified type
    ///
    /// # Arguments
    /// * `backend` - The backend type to use (Ollama, OpenAi, LlamaCpp)
    /// * `api_key` - API key; falls back to `OPENAI_API_KEY` for the
    ///   hosted backend, unused by the local backends
    /// * `api_url` - Optional custom API URL (uses default if None)
    ///
    /// # Errors
    /// `ChatError::MissingCredential` when the hosted backend has no
    /// key - callers treat this as fatal at startup.
    pub fn create(
        backend: BackendType,
        api_key: Option<String>,
        api_url: Option<String>,
    ) -> Result<Arc<dyn ChatBackend>, ChatError> {
        Self::create_with_verbose(backend, api_key, api_url, false)
    }

    /// Same as [`create`](Self::create) with console request dumps
    /// toggled on or off.
    pub fn create_with_verbose(
        backend: BackendType,
        api_key: Option<String>,
        api_url: Option<String>,
        verbose: bool,
    ) -> Result<Arc<dyn ChatBackend>, ChatError> {
        match backend {
            BackendType::Ollama => {
                let url = api_url.unwrap_or_else(|| OLLAMA_API_URL.to_string());
                Ok(Arc::new(OllamaClient::new(url).with_verbose(verbose)))
            }
            BackendType::OpenAi => {
                let url = api_url.unwrap_or_else(|| OPENAI_API_URL.to_string());
                let key = api_key
                    .or_else(|| env::var("OPENAI_API_KEY").ok())
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| {
                        ChatError::MissingCredential(
                            "OPENAI_API_KEY not found in environment".to_string(),
                        )
                    })?;
                Ok(Arc::new(OpenAiClient::new(key, url).with_verbose(verbose)))
            }
            BackendType::LlamaCpp => {
                let url = api_url.ok_or_else(|| {
                    ChatError::BackendFailure(
                        "llama.cpp backend requires an API URL".to_string(),
                    )
                })?;
                Ok(Arc::new(LlamaCppClient::new(url).with_verbose(verbose)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_create_ollama_uses_default_url() {
        let backend = ClientFactory::create(BackendType::Ollama, None, None).unwrap();
        assert_eq!(backend.name(), "ollama");
    }

    #[test]
    fn test_create_openai_with_explicit_key() {
        let backend =
            ClientFactory::create(BackendType::OpenAi, Some("test-key".to_string()), None)
                .unwrap();
        assert_eq!(backend.name(), "openai");
    }

    #[test]
    #[serial]
    fn test_create_openai_without_key_is_fatal() {
        let old_key = env::var("OPENAI_API_KEY").ok();
        env::remove_var("OPENAI_API_KEY");

        let result = ClientFactory::create(BackendType::OpenAi, None, None);
        assert!(matches!(result, Err(ChatError::MissingCredential(_))));

        if let Some(key) = old_key {
            env::set_var("OPENAI_API_KEY", key);
        }
    }

    #[test]
    fn test_create_llama_cpp_requires_url() {
        let result = ClientFactory::create(BackendType::LlamaCpp, None, None);
        assert!(matches!(result, Err(ChatError::BackendFailure(_))));

        let backend = ClientFactory::create(
            BackendType::LlamaCpp,
            None,
            Some("http://localhost:8080".to_string()),
        )
        .unwrap();
        assert_eq!(backend.name(), "llama.cpp");
    }
}
