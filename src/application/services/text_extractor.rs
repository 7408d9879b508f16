use std::sync::Arc;

use crate::application::ports::{TextDetectionError, TextDetector};
use crate::domain::{ExtractedDocument, FileExtension};

pub struct TextExtractor<D>
where
    D: TextDetector,
{
    detector: Arc<D>,
}

impl<D> TextExtractor<D>
where
    D: TextDetector,
{
    pub fn new(detector: Arc<D>) -> Self {
        Self { detector }
    }

    /// Runs OCR over `data` and keeps the recognized lines in service order.
    ///
    /// Detection errors are returned as-is; nothing is retried here.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract(
        &self,
        data: &[u8],
        extension: FileExtension,
    ) -> Result<ExtractedDocument, TextDetectionError> {
        let blocks = self.detector.detect_document_text(data).await?;
        let document = ExtractedDocument::from_blocks(&blocks);

        tracing::debug!(
            blocks = blocks.len(),
            lines = document.line_count(),
            "Text detection completed"
        );

        Ok(document)
    }
}
