use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::Level;

use crate::application::ports::{DocumentStoreError, TextDetectionError};
use crate::application::services::{ErrorKind, UploadError};
use crate::domain::UnsupportedFileType;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    MissingFile,

    #[error(transparent)]
    UnsupportedFileType(#[from] UnsupportedFileType),

    #[error("Failed to read multipart: {message}")]
    InvalidMultipart { status: StatusCode, message: String },

    #[error("Report export is disabled")]
    ReportsDisabled,

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Storage(DocumentStoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidMultipart { status, .. } => *status,
            ApiError::ReportsDisabled | ApiError::ReportNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upload(e) => match e.kind() {
                ErrorKind::ClientInput => match e {
                    UploadError::TextDetection(TextDetectionError::DocumentTooLarge(_)) => {
                        StatusCode::PAYLOAD_TOO_LARGE
                    }
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                },
                ErrorKind::Upstream => StatusCode::BAD_GATEWAY,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Upstream 502s only warn here; internal failures log at error.
    pub fn log_level(&self) -> Level {
        match self {
            ApiError::Upload(e) if matches!(e.kind(), ErrorKind::Upstream) => Level::WARN,
            _ if self.status_code().is_server_error() => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::InvalidMultipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.log_level() == Level::ERROR {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
