use std::sync::Arc;

use safework::application::ports::LlmClientError;
use safework::application::services::{
    DEFAULT_FEEDBACK_MAX_TOKENS, DEFAULT_FEEDBACK_MODEL, FeedbackGenerator, SYSTEM_PROMPT,
    TEXT_DELIMITER, build_feedback_prompt,
};
use safework::domain::MessageRole;
use safework::infrastructure::llm::MockLlmClient;

#[test]
fn given_extracted_text_when_building_prompt_then_text_sits_between_delimiters() {
    let text = "Loose guardrail on platform 3\nOil spill near pump B";

    let prompt = build_feedback_prompt(text);

    let expected = format!("{TEXT_DELIMITER}\n{text}\n{TEXT_DELIMITER}");
    assert!(prompt.contains(&expected));
    assert!(prompt.contains("Risks Identified"));
    assert!(prompt.contains("Safety Recommendations"));
    assert!(prompt.contains("Overall Assessment"));
}

#[test]
fn given_different_inputs_when_building_requests_then_model_and_bound_are_fixed() {
    let generator = FeedbackGenerator::with_defaults(Arc::new(MockLlmClient::replying("ok")));

    let long = "long text ".repeat(500);

    for text in ["", "short", long.as_str()] {
        let request = generator.build_request(text);

        assert_eq!(request.model, DEFAULT_FEEDBACK_MODEL);
        assert_eq!(request.max_tokens, DEFAULT_FEEDBACK_MAX_TOKENS);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert!(request.messages[1].content.contains(text));
    }
}

#[tokio::test]
async fn given_padded_completion_when_generating_then_returns_trimmed_feedback() {
    let llm = Arc::new(MockLlmClient::replying(
        "\n\n1. Risks: ... 2. Recommendations: ...  \n",
    ));
    let generator = FeedbackGenerator::new(Arc::clone(&llm), "gpt-4", 800);

    let feedback = generator.generate("Loose guardrail").await.unwrap();

    assert_eq!(feedback.as_str(), "1. Risks: ... 2. Recommendations: ...");
    let sent = llm.last_request().unwrap();
    assert!(sent.messages[1].content.contains("Loose guardrail"));
}

#[tokio::test]
async fn given_llm_failure_when_generating_then_same_error_is_returned() {
    let error = LlmClientError::ApiRequestFailed("HTTP 401: invalid api key".to_string());
    let generator =
        FeedbackGenerator::with_defaults(Arc::new(MockLlmClient::failing(error.clone())));

    let result = generator.generate("anything").await;

    assert_eq!(result, Err(error));
}

#[tokio::test]
async fn given_rate_limit_when_generating_then_variant_is_preserved() {
    let generator = FeedbackGenerator::with_defaults(Arc::new(MockLlmClient::failing(
        LlmClientError::RateLimited,
    )));

    let result = generator.generate("anything").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}
