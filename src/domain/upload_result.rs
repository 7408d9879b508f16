use super::file_id::FileId;
use super::storage_path::StoragePath;

/// Risk score reported until a scoring model exists.
pub const PLACEHOLDER_RISK_SCORE: u32 = 0;

/// Outcome of one completed upload pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub file_id: FileId,
    pub filename: String,
    pub risk_score: u32,
    pub extracted_text: String,
    pub feedback: String,
    pub report_path: Option<StoragePath>,
}
