mod feedback_generator;
mod report_exporter;
mod text_extractor;
mod upload_service;

pub use feedback_generator::{
    DEFAULT_FEEDBACK_MAX_TOKENS, DEFAULT_FEEDBACK_MODEL, FeedbackGenerator, SYSTEM_PROMPT,
    TEXT_DELIMITER, build_feedback_prompt,
};
pub use report_exporter::{ReportExportError, ReportExporter};
pub use text_extractor::TextExtractor;
pub use upload_service::{ErrorKind, UploadError, UploadService};
