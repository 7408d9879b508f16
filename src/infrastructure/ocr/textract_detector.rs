use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_textract::Client;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{Block, BlockType as SdkBlockType, Document};

use crate::application::ports::{TextDetectionError, TextDetector};
use crate::domain::{BlockType, TextBlock};

/// AWS Textract `DetectDocumentText` adapter.
pub struct TextractDetector {
    client: Client,
}

impl TextractDetector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS credential chain for `region`.
    pub async fn from_region(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl TextDetector for TextractDetector {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn detect_document_text(&self, data: &[u8]) -> Result<Vec<TextBlock>, TextDetectionError> {
        let document = Document::builder().bytes(Blob::new(data)).build();

        let output = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| {
                if let Some(service_error) = e.as_service_error() {
                    if service_error.is_unsupported_document_exception() {
                        return TextDetectionError::UnsupportedDocument(service_error.to_string());
                    }
                    if service_error.is_document_too_large_exception() {
                        return TextDetectionError::DocumentTooLarge(service_error.to_string());
                    }
                }
                TextDetectionError::ServiceFailed(DisplayErrorContext(&e).to_string())
            })?;

        Ok(output.blocks().iter().map(to_text_block).collect())
    }
}

pub fn to_text_block(block: &Block) -> TextBlock {
    let block_type = match block.block_type() {
        Some(SdkBlockType::Line) => BlockType::Line,
        Some(SdkBlockType::Word) => BlockType::Word,
        Some(SdkBlockType::Page) => BlockType::Page,
        Some(other) => BlockType::Other(other.as_str().to_string()),
        None => BlockType::Other(String::new()),
    };

    TextBlock::new(block_type, block.text().unwrap_or_default())
}
