use bytes::Bytes;

use super::file_extension::{FileExtension, UnsupportedFileType};
use super::filename::sanitize_filename;

const FALLBACK_STEM: &str = "upload";

/// One uploaded file, valid for the lifetime of a single request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: String,
    pub extension: FileExtension,
    pub data: Bytes,
}

impl UploadRequest {
    pub fn new(raw_filename: &str, data: Bytes) -> Result<Self, UnsupportedFileType> {
        let (filename, extension) = Self::validate_filename(raw_filename)?;

        Ok(Self {
            filename,
            extension,
            data,
        })
    }

    /// Checks the extension of `raw_filename` and derives a safe stored name.
    ///
    /// The extension is read from the client name, so a stem that sanitizes to
    /// nothing (e.g. `报告.pdf`) still uploads, as `upload.pdf`.
    pub fn validate_filename(
        raw_filename: &str,
    ) -> Result<(String, FileExtension), UnsupportedFileType> {
        let extension = FileExtension::from_filename(raw_filename.trim())?;
        let sanitized = sanitize_filename(raw_filename);

        let keeps_extension = matches!(
            sanitized.rsplit_once('.'),
            Some((stem, ext)) if !stem.is_empty() && FileExtension::parse(ext) == Ok(extension)
        );
        let filename = if keeps_extension {
            sanitized
        } else {
            format!("{FALLBACK_STEM}.{extension}")
        };

        Ok((filename, extension))
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
