use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::presentation::config::{StorageProvider, StorageSettings};

use super::object_document_store::ObjectDocumentStore;

pub struct DocumentStoreFactory;

impl DocumentStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn DocumentStore>, DocumentStoreError> {
        match settings.provider {
            StorageProvider::Local => {
                let store = ObjectDocumentStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProvider::S3 => {
                let bucket = settings.bucket.as_deref().ok_or_else(|| {
                    DocumentStoreError::UploadFailed("storage.bucket required for s3".into())
                })?;
                let store = ObjectDocumentStore::s3(bucket, &settings.region)?;
                Ok(Arc::new(store))
            }
            StorageProvider::Memory => Ok(Arc::new(ObjectDocumentStore::in_memory())),
        }
    }
}
