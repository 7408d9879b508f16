use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextDetector};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, report_handler, upload_document_handler};
use crate::presentation::state::AppState;

pub fn create_router<D, L>(state: AppState<D, L>) -> Router
where
    D: TextDetector + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/upload-document",
            post(upload_document_handler::<D, L>)
                .layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        .route("/reports/{file_id}", get(report_handler::<D, L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
