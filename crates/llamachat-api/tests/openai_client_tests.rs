use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use llamachat_api::{ChatBackend, OpenAiClient};
use llamachat_models::{Message, ModelConfig};

fn test_config() -> ModelConfig {
    ModelConfig::new("gpt-4", 0.5, 1000)
}

#[tokio::test]
async fn chat_returns_generated_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "messages": [{"role": "user", "content": "hi"}],
            "temperature": 0.5,
            "max_tokens": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl_test123",
            "object": "chat.completion",
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "hello"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-api-key".to_string(), server.uri());
    let reply = client
        .chat(&test_config(), vec![Message::user("hi")])
        .await
        .unwrap();

    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn chat_trims_surrounding_whitespace() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "  padded  \n"},
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-api-key".to_string(), server.uri());
    let reply = client
        .chat(&test_config(), vec![Message::user("hi")])
        .await
        .unwrap();

    assert_eq!(reply, "padded");
}

#[tokio::test]
async fn chat_reports_auth_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("bad-key".to_string(), server.uri());
    let err = client
        .chat(&test_config(), vec![Message::user("hi")])
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"), "unexpected error: {}", message);
}

#[tokio::test]
async fn chat_rejects_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-api-key".to_string(), server.uri());
    let result = client.chat(&test_config(), vec![Message::user("hi")]).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn chat_rejects_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = OpenAiClient::new("test-api-key".to_string(), server.uri());
    let err = client
        .chat(&test_config(), vec![Message::user("hi")])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No choices"));
}
