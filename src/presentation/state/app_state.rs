use std::sync::Arc;

use crate::application::ports::{LlmClient, TextDetector};
use crate::application::services::UploadService;

/// Built once at startup and shared by every request.
pub struct AppState<D, L>
where
    D: TextDetector,
    L: LlmClient,
{
    pub upload_service: Arc<UploadService<D, L>>,
    pub max_upload_bytes: usize,
}

impl<D, L> Clone for AppState<D, L>
where
    D: TextDetector,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
