use std::fmt;

/// Document formats the OCR service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Jpg,
    Jpeg,
    Png,
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported file type: '{0}'")]
pub struct UnsupportedFileType(pub String);

impl FileExtension {
    /// Resolves the extension after the last `.` of `filename`, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, UnsupportedFileType> {
        let (_, ext) = filename
            .rsplit_once('.')
            .ok_or_else(|| UnsupportedFileType(String::new()))?;
        Self::parse(ext)
    }

    pub fn parse(ext: &str) -> Result<Self, UnsupportedFileType> {
        match ext.to_lowercase().as_str() {
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            other => Err(UnsupportedFileType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
