use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use llamachat_api::{ChatBackend, ChatClient};
use llamachat_chat::Session;
use llamachat_models::{ChatError, Message, ModelConfig, Role};

struct StubBackend {
    reply: Result<String, String>,
}

impl StubBackend {
    fn replying(text: &str) -> ChatClient {
        ChatClient::new(Arc::new(Self {
            reply: Ok(text.to_string()),
        }))
    }

    fn failing(message: &str) -> ChatClient {
        ChatClient::new(Arc::new(Self {
            reply: Err(message.to_string()),
        }))
    }
}

#[async_trait]
impl ChatBackend for StubBackend {
    async fn chat(&self, _cfg: &ModelConfig, _messages: Vec<Message>) -> Result<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[tokio::test]
async fn one_cycle_appends_user_then_assistant() {
    let client = StubBackend::replying("4");
    let mut session = Session::default();

    let reply = session.send(&client, "What is 2+2?").await.unwrap();
    assert_eq!(reply.text, "4");

    assert_eq!(session.len(), 2);
    assert_eq!(session.turns()[0].role, Role::User);
    assert_eq!(session.turns()[0].text, "What is 2+2?");
    assert_eq!(session.turns()[1].role, Role::Assistant);
    assert_eq!(session.turns()[1].text, "4");
    assert!(session.turns()[1].latency.is_some());
}

#[tokio::test]
async fn backend_failure_leaves_transcript_untouched() {
    let client = StubBackend::failing("connection refused");
    let mut session = Session::default();
    session.send(&client, "first").await.unwrap_err();

    assert!(session.is_empty());
}

#[tokio::test]
async fn empty_input_is_rejected_and_not_recorded() {
    let client = StubBackend::replying("hello");
    let mut session = Session::default();

    let err = session.send(&client, "   ").await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyInput));
    assert!(session.is_empty());
}

#[tokio::test]
async fn transcript_grows_across_cycles() {
    let client = StubBackend::replying("ok");
    let mut session = Session::default();

    for i in 0..3 {
        session.send(&client, &format!("message {}", i)).await.unwrap();
    }

    assert_eq!(session.len(), 6);
    // Strict user/assistant alternation in insertion order
    for (i, turn) in session.turns().iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(turn.role, expected);
    }
}
