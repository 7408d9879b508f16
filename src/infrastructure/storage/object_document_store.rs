use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::StoragePath;

/// `DocumentStore` over any `object_store` backend.
pub struct ObjectDocumentStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectDocumentStore {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    pub fn local(base_path: PathBuf) -> Result<Self, DocumentStoreError> {
        std::fs::create_dir_all(&base_path).map_err(DocumentStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(fs)))
    }

    /// S3 bucket; credentials come from the standard `AWS_*` environment.
    pub fn s3(bucket: &str, region: &str) -> Result<Self, DocumentStoreError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .with_region(region)
            .build()
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemory::new()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for ObjectDocumentStore {
    async fn put(&self, path: &StoragePath, data: Bytes) -> Result<(), DocumentStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, path: &StoragePath) -> Result<Bytes, DocumentStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => DocumentStoreError::NotFound(path.to_string()),
            other => DocumentStoreError::DownloadFailed(other.to_string()),
        })?;

        result
            .bytes()
            .await
            .map_err(|e| DocumentStoreError::DownloadFailed(e.to_string()))
    }
}
