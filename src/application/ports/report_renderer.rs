/// Turns plain feedback text into a printable document.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<Vec<u8>, ReportRenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportRenderError {
    #[error("render failed: {0}")]
    RenderFailed(String),
}
