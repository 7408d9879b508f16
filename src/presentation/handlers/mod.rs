mod error;
mod health;
mod reports;
mod upload;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use reports::report_handler;
pub use upload::{FILE_FIELD, UploadResponse, upload_document_handler};
