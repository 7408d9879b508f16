use std::fmt;

use super::file_id::FileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn upload(file_id: &FileId, filename: &str) -> Self {
        Self(format!("uploads/{}/{}", file_id.as_uuid(), filename))
    }

    pub fn report(name: &str) -> Self {
        Self(format!("reports/{}.pdf", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
