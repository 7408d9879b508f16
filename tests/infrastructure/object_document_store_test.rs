use bytes::Bytes;

use safework::application::ports::{DocumentStore, DocumentStoreError};
use safework::domain::{FileId, StoragePath};
use safework::infrastructure::storage::{DocumentStoreFactory, ObjectDocumentStore};
use safework::presentation::config::{StorageProvider, StorageSettings};

fn create_test_store() -> (tempfile::TempDir, ObjectDocumentStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ObjectDocumentStore::local(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn storage_settings(provider: StorageProvider, local_path: &str) -> StorageSettings {
    StorageSettings {
        provider,
        local_path: local_path.to_string(),
        bucket: None,
        region: "us-east-1".to_string(),
        persist_uploads: false,
    }
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::upload(&FileId::new(), "report.jpg");

    store
        .put(&path, Bytes::from_static(b"test content"))
        .await
        .unwrap();

    let fetched = store.get(&path).await.unwrap();
    assert_eq!(fetched, Bytes::from_static(b"test content"));
}

#[tokio::test]
async fn given_stored_file_when_listing_directory_then_file_is_on_disk() {
    let (dir, store) = create_test_store();
    let path = StoragePath::report("abc");

    store.put(&path, Bytes::from_static(b"%PDF-")).await.unwrap();

    assert!(dir.path().join("reports").join("abc.pdf").exists());
}

#[tokio::test]
async fn given_missing_key_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();

    let result = store.get(&StoragePath::report("missing")).await;

    assert!(matches!(result, Err(DocumentStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_same_key_when_putting_twice_then_last_write_wins() {
    let store = ObjectDocumentStore::in_memory();
    let path = StoragePath::report("r");

    store.put(&path, Bytes::from_static(b"one")).await.unwrap();
    store.put(&path, Bytes::from_static(b"two")).await.unwrap();

    assert_eq!(store.get(&path).await.unwrap(), Bytes::from_static(b"two"));
}

#[tokio::test]
async fn given_s3_provider_without_bucket_when_creating_then_fails() {
    let settings = storage_settings(StorageProvider::S3, "/tmp/unused");

    assert!(DocumentStoreFactory::create(&settings).is_err());
}

#[tokio::test]
async fn given_memory_provider_when_creating_then_store_round_trips() {
    let store = DocumentStoreFactory::create(&storage_settings(StorageProvider::Memory, "")).unwrap();
    let path = StoragePath::report("m");

    store.put(&path, Bytes::from_static(b"x")).await.unwrap();

    assert_eq!(store.get(&path).await.unwrap(), Bytes::from_static(b"x"));
}

#[tokio::test]
async fn given_local_provider_when_creating_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let base = dir.path().join("nested").join("store");

    DocumentStoreFactory::create(&storage_settings(
        StorageProvider::Local,
        base.to_str().unwrap(),
    ))
    .unwrap();

    assert!(base.is_dir());
}
