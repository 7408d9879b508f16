mod extracted_document;
mod feedback_report;
mod file_extension;
mod file_id;
mod filename;
mod message;
mod message_role;
mod storage_path;
mod text_block;
mod upload;
mod upload_result;

pub use extracted_document::ExtractedDocument;
pub use feedback_report::FeedbackReport;
pub use file_extension::{FileExtension, UnsupportedFileType};
pub use file_id::FileId;
pub use filename::sanitize_filename;
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use storage_path::StoragePath;
pub use text_block::{BlockType, TextBlock};
pub use upload::UploadRequest;
pub use upload_result::{PLACEHOLDER_RISK_SCORE, UploadResult};
