mod document_store;
mod llm_client;
mod report_renderer;
mod text_detector;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use llm_client::{ChatCompletionRequest, LlmClient, LlmClientError};
pub use report_renderer::{ReportRenderError, ReportRenderer};
pub use text_detector::{TextDetectionError, TextDetector};
