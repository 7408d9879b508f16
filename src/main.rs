use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use safework::application::services::{
    FeedbackGenerator, ReportExporter, TextExtractor, UploadService,
};
use safework::infrastructure::llm::OpenAiClient;
use safework::infrastructure::observability::{TracingConfig, init_tracing};
use safework::infrastructure::ocr::TextractDetector;
use safework::infrastructure::report::PdfReportRenderer;
use safework::infrastructure::storage::DocumentStoreFactory;
use safework::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (environment, settings) = Settings::load()?;

    init_tracing(&TracingConfig::new(environment, &settings.logging));

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured; feedback generation will fail");
    }

    let detector = Arc::new(TextractDetector::from_region(&settings.ocr.region).await);
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
        Duration::from_secs(settings.llm.timeout_secs),
    )?);

    let mut upload_service = UploadService::new(
        TextExtractor::new(detector),
        FeedbackGenerator::new(llm_client, settings.llm.model.clone(), settings.llm.max_tokens),
    );

    if settings.storage.persist_uploads || settings.report.enabled {
        let store = DocumentStoreFactory::create(&settings.storage)?;
        tracing::info!(
            provider = ?settings.storage.provider,
            persist_uploads = settings.storage.persist_uploads,
            reports = settings.report.enabled,
            "Document store configured"
        );

        if settings.storage.persist_uploads {
            upload_service = upload_service.with_upload_store(Arc::clone(&store));
        }
        if settings.report.enabled {
            upload_service = upload_service
                .with_report_exporter(ReportExporter::new(Arc::new(PdfReportRenderer::new()), store));
        }
    }

    let state = AppState {
        upload_service: Arc::new(upload_service),
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!(
        %addr,
        ocr_region = %settings.ocr.region,
        model = %settings.llm.model,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
