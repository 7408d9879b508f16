use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::application::ports::{DocumentStoreError, LlmClient, TextDetector};
use crate::presentation::handlers::error::ApiError;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn report_handler<D, L>(
    State(state): State<AppState<D, L>>,
    Path(file_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    D: TextDetector + 'static,
    L: LlmClient + 'static,
{
    let exporter = state
        .upload_service
        .report_exporter()
        .ok_or(ApiError::ReportsDisabled)?;

    let name = file_id.to_string();
    let pdf = exporter.fetch(&name).await.map_err(|e| match e {
        DocumentStoreError::NotFound(_) => ApiError::ReportNotFound(name.clone()),
        other => ApiError::Storage(other),
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}.pdf\"", name),
            ),
        ],
        pdf,
    ))
}
