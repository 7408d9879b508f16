use async_trait::async_trait;

use crate::domain::TextBlock;

/// Document text detection (OCR) over raw image or PDF bytes.
#[async_trait]
pub trait TextDetector: Send + Sync {
    async fn detect_document_text(&self, data: &[u8]) -> Result<Vec<TextBlock>, TextDetectionError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextDetectionError {
    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),
    #[error("document too large: {0}")]
    DocumentTooLarge(String),
    #[error("text detection failed: {0}")]
    ServiceFailed(String),
}
