use async_trait::async_trait;
use serde::Serialize;

use crate::domain::ChatMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Returns the content of the first completion, as produced by the model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
