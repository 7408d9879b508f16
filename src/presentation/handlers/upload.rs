use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::{LlmClient, TextDetector};
use crate::domain::{UploadRequest, UploadResult};
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub risk_score: u32,
    pub extracted_text: String,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl From<UploadResult> for UploadResponse {
    fn from(result: UploadResult) -> Self {
        let file_id = result.file_id.to_string();
        let pdf_url = result
            .report_path
            .as_ref()
            .map(|_| format!("/reports/{}", file_id));

        Self {
            file_id,
            filename: result.filename,
            risk_score: result.risk_score,
            extracted_text: result.extracted_text,
            feedback: result.feedback,
            pdf_url,
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler<D, L>(
    State(state): State<AppState<D, L>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    D: TextDetector + 'static,
    L: LlmClient + 'static,
{
    let upload = loop {
        let Some(field) = multipart.next_field().await? else {
            return Err(ApiError::MissingFile);
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let Some(raw_filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
        else {
            return Err(ApiError::MissingFile);
        };

        let (filename, extension) = UploadRequest::validate_filename(&raw_filename)?;
        let data = field.bytes().await?;

        tracing::debug!(
            filename = %filename,
            content_type = extension.mime(),
            bytes = data.len(),
            "File upload received"
        );

        break UploadRequest {
            filename,
            extension,
            data,
        };
    };

    let result = state.upload_service.process(upload).await?;

    Ok(Json(UploadResponse::from(result)))
}
