use std::io;

use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), DocumentStoreError>;

    async fn get(&self, path: &StoragePath) -> Result<Bytes, DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
