use std::sync::Arc;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, LlmClient, LlmClientError, TextDetectionError,
    TextDetector,
};
use crate::application::services::{
    FeedbackGenerator, ReportExportError, ReportExporter, TextExtractor,
};
use crate::domain::{FileId, PLACEHOLDER_RISK_SCORE, StoragePath, UploadRequest, UploadResult};

/// Coarse classification callers use to pick a response without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ClientInput,
    Upstream,
    Internal,
}

pub struct UploadService<D, L>
where
    D: TextDetector,
    L: LlmClient,
{
    text_extractor: TextExtractor<D>,
    feedback_generator: FeedbackGenerator<L>,
    upload_store: Option<Arc<dyn DocumentStore>>,
    report_exporter: Option<ReportExporter>,
}

impl<D, L> UploadService<D, L>
where
    D: TextDetector,
    L: LlmClient,
{
    pub fn new(text_extractor: TextExtractor<D>, feedback_generator: FeedbackGenerator<L>) -> Self {
        Self {
            text_extractor,
            feedback_generator,
            upload_store: None,
            report_exporter: None,
        }
    }

    /// Keeps a copy of every accepted upload in `store`.
    pub fn with_upload_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.upload_store = Some(store);
        self
    }

    pub fn with_report_exporter(mut self, exporter: ReportExporter) -> Self {
        self.report_exporter = Some(exporter);
        self
    }

    pub fn report_exporter(&self) -> Option<&ReportExporter> {
        self.report_exporter.as_ref()
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(filename = %upload.filename, extension = %upload.extension)
    )]
    pub async fn process(&self, upload: UploadRequest) -> Result<UploadResult, UploadError> {
        let file_id = FileId::new();

        if let Some(store) = &self.upload_store {
            let path = StoragePath::upload(&file_id, &upload.filename);
            store.put(&path, upload.data.clone()).await?;
            tracing::debug!(path = %path, "Upload persisted");
        }

        let document = self
            .text_extractor
            .extract(&upload.data, upload.extension)
            .await?;
        let extracted_text = document.text();

        let feedback = self.feedback_generator.generate(&extracted_text).await?;

        let report_path = match &self.report_exporter {
            Some(exporter) => Some(
                exporter
                    .export(feedback.as_str(), &file_id.to_string())
                    .await?,
            ),
            None => None,
        };

        tracing::info!(
            file_id = %file_id,
            lines = document.line_count(),
            feedback_chars = feedback.as_str().len(),
            "Upload processed"
        );

        Ok(UploadResult {
            file_id,
            filename: upload.filename,
            risk_score: PLACEHOLDER_RISK_SCORE,
            extracted_text,
            feedback: feedback.into_inner(),
            report_path,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    TextDetection(#[from] TextDetectionError),
    #[error(transparent)]
    FeedbackGeneration(#[from] LlmClientError),
    #[error("storage: {0}")]
    Storage(#[from] DocumentStoreError),
    #[error("report export: {0}")]
    ReportExport(#[from] ReportExportError),
}

impl UploadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::TextDetection(
                TextDetectionError::UnsupportedDocument(_) | TextDetectionError::DocumentTooLarge(_),
            ) => ErrorKind::ClientInput,
            UploadError::TextDetection(_) | UploadError::FeedbackGeneration(_) => {
                ErrorKind::Upstream
            }
            UploadError::Storage(_) | UploadError::ReportExport(_) => ErrorKind::Internal,
        }
    }
}
