mod object_document_store;
mod store_factory;

pub use object_document_store::ObjectDocumentStore;
pub use store_factory::DocumentStoreFactory;
