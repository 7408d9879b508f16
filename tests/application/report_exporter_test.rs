use std::sync::Arc;

use safework::application::ports::{
    DocumentStore, DocumentStoreError, ReportRenderError, ReportRenderer,
};
use safework::application::services::{ReportExportError, ReportExporter};
use safework::domain::StoragePath;
use safework::infrastructure::report::PdfReportRenderer;
use safework::infrastructure::storage::ObjectDocumentStore;

struct FailingRenderer;

impl ReportRenderer for FailingRenderer {
    fn render(&self, _text: &str) -> Result<Vec<u8>, ReportRenderError> {
        Err(ReportRenderError::RenderFailed("boom".to_string()))
    }
}

#[tokio::test]
async fn given_feedback_when_exporting_then_pdf_is_stored_under_report_key() {
    let store: Arc<dyn DocumentStore> = Arc::new(ObjectDocumentStore::in_memory());
    let exporter = ReportExporter::new(Arc::new(PdfReportRenderer::new()), Arc::clone(&store));

    let path = exporter
        .export("1. Risks: loose guardrail", "report-42")
        .await
        .unwrap();

    assert_eq!(path, StoragePath::report("report-42"));
    let stored = store.get(&path).await.unwrap();
    assert!(stored.starts_with(b"%PDF-"));
    assert_eq!(exporter.fetch("report-42").await.unwrap(), stored);
}

#[tokio::test]
async fn given_unknown_name_when_fetching_then_not_found() {
    let exporter = ReportExporter::new(
        Arc::new(PdfReportRenderer::new()),
        Arc::new(ObjectDocumentStore::in_memory()),
    );

    let result = exporter.fetch("missing").await;

    assert!(matches!(result, Err(DocumentStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_render_failure_when_exporting_then_nothing_is_stored() {
    let store: Arc<dyn DocumentStore> = Arc::new(ObjectDocumentStore::in_memory());
    let exporter = ReportExporter::new(Arc::new(FailingRenderer), Arc::clone(&store));

    let result = exporter.export("text", "r1").await;

    assert!(matches!(result, Err(ReportExportError::Render(_))));
    assert!(store.get(&StoragePath::report("r1")).await.is_err());
}
