use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use safework::application::ports::{ChatCompletionRequest, LlmClient, LlmClientError};
use safework::domain::ChatMessage;
use safework::infrastructure::llm::OpenAiClient;

fn client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new(
        "sk-test".to_string(),
        Some(format!("{}/v1/", server.uri())),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "gpt-4".to_string(),
        messages: vec![
            ChatMessage::system("You are an expert in safety and risk assessment."),
            ChatMessage::user("Extracted Text:\n\"\"\"\nLoose guardrail\n\"\"\""),
        ],
        max_tokens: 800,
    }
}

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4",
            "max_tokens": 800,
            "messages": [{"role": "system"}, {"role": "user"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": " 1. Risks: ... \n"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    assert_eq!(result, Ok(" 1. Risks: ... \n".to_string()));
}

#[tokio::test]
async fn given_too_many_requests_when_completing_then_returns_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    assert_eq!(result, Err(LlmClientError::RateLimited));
}

#[tokio::test]
async fn given_server_error_when_completing_then_status_and_body_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected api failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_choices_when_completing_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_malformed_body_when_completing_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_null_content_when_completing_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&server)
        .await;

    let result = client(&server).complete(&request()).await;

    assert_eq!(
        result,
        Err(LlmClientError::InvalidResponse(
            "completion has no content".to_string()
        ))
    );
}
