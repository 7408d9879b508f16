use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, ReportRenderError, ReportRenderer,
};
use crate::domain::StoragePath;

/// Renders feedback to a document and writes it to the store under `reports/{name}.pdf`.
pub struct ReportExporter {
    renderer: Arc<dyn ReportRenderer>,
    store: Arc<dyn DocumentStore>,
}

impl ReportExporter {
    pub fn new(renderer: Arc<dyn ReportRenderer>, store: Arc<dyn DocumentStore>) -> Self {
        Self { renderer, store }
    }

    pub async fn export(&self, feedback: &str, name: &str) -> Result<StoragePath, ReportExportError> {
        let rendered = self.renderer.render(feedback)?;
        let path = StoragePath::report(name);
        let size = rendered.len();

        self.store.put(&path, Bytes::from(rendered)).await?;

        tracing::debug!(path = %path, bytes = size, "Feedback report exported");
        Ok(path)
    }

    pub async fn fetch(&self, name: &str) -> Result<Bytes, DocumentStoreError> {
        self.store.get(&StoragePath::report(name)).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportExportError {
    #[error("render: {0}")]
    Render(#[from] ReportRenderError),
    #[error("storage: {0}")]
    Storage(#[from] DocumentStoreError),
}
