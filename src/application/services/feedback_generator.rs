use std::sync::Arc;

use crate::application::ports::{ChatCompletionRequest, LlmClient, LlmClientError};
use crate::domain::{ChatMessage, FeedbackReport};
use crate::infrastructure::observability::sanitize_prompt;

pub const DEFAULT_FEEDBACK_MODEL: &str = "gpt-4";
pub const DEFAULT_FEEDBACK_MAX_TOKENS: u32 = 800;

pub const SYSTEM_PROMPT: &str = "You are an expert in safety and risk assessment.";
pub const TEXT_DELIMITER: &str = "\"\"\"";

const INSTRUCTIONS: &str = "\
You are a safety and risk assessment expert. Analyze the following maintenance or safety report text and provide:

1. **Risks Identified** 🔴 Mention any hazards, failures, or dangerous conditions.
2. **Safety Recommendations** ✅ Give practical suggestions to mitigate those risks.
3. **Overall Assessment** 🟡 Summarize how safe the environment appears based on the content.

Use clear, professional English.";

/// Builds the user message: fixed instructions, then the extracted text between delimiters.
pub fn build_feedback_prompt(extracted_text: &str) -> String {
    format!(
        "{INSTRUCTIONS}\n\nExtracted Text:\n{TEXT_DELIMITER}\n{extracted_text}\n{TEXT_DELIMITER}\n"
    )
}

pub struct FeedbackGenerator<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    model: String,
    max_tokens: u32,
}

impl<L> FeedbackGenerator<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            llm_client,
            model: model.into(),
            max_tokens,
        }
    }

    pub fn with_defaults(llm_client: Arc<L>) -> Self {
        Self::new(llm_client, DEFAULT_FEEDBACK_MODEL, DEFAULT_FEEDBACK_MAX_TOKENS)
    }

    pub fn build_request(&self, extracted_text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_feedback_prompt(extracted_text)),
            ],
            max_tokens: self.max_tokens,
        }
    }

    #[tracing::instrument(skip(self, extracted_text), fields(model = %self.model))]
    pub async fn generate(&self, extracted_text: &str) -> Result<FeedbackReport, LlmClientError> {
        tracing::debug!(
            text_preview = %sanitize_prompt(extracted_text),
            "Requesting safety feedback"
        );

        let request = self.build_request(extracted_text);

        match self.llm_client.complete(&request).await {
            Ok(completion) => Ok(FeedbackReport::new(completion)),
            Err(e) => {
                tracing::error!(error = %e, "Feedback generation failed");
                Err(e)
            }
        }
    }
}
