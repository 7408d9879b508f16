use std::sync::Mutex;

use crate::application::ports::{ChatCompletionRequest, LlmClient, LlmClientError};

/// Replies with a canned result and remembers the last request it saw.
pub struct MockLlmClient {
    reply: Result<String, LlmClientError>,
    last_request: Mutex<Option<ChatCompletionRequest>>,
}

impl MockLlmClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(error: LlmClientError) -> Self {
        Self {
            reply: Err(error),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request
            .lock()
            .map(|guard| (*guard).clone())
            .unwrap_or(None)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, LlmClientError> {
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.reply.clone()
    }
}
