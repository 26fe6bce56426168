//! Law Journal Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use journal_api::{build_router, AppState};
use journal_auth::{AdminGate, IdentityClient, TokenVerifier};
use journal_core::config::AppConfig;
use journal_core::error::AppError;
use journal_service::catalog::CatalogService;
use journal_service::extract::DocumentExtractor;
use journal_service::intake::IntakeService;
use journal_service::review::ReviewService;
use journal_service::search::SearchCoordinator;
use journal_store::client::ServiceClient;
use journal_store::{BucketObjectStore, RestSubmissionStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("JOURNAL_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting law journal server v{}", env!("CARGO_PKG_VERSION"));

    // ── Remote collaborators ─────────────────────────────────────
    let service_client = ServiceClient::new(&config.store)?;
    let submissions = Arc::new(RestSubmissionStore::new(service_client.clone()));
    let objects = Arc::new(BucketObjectStore::new(service_client));
    let members = Arc::new(IdentityClient::new(&config.identity)?);

    // ── Auth ─────────────────────────────────────────────────────
    let token_verifier = Arc::new(TokenVerifier::new(&config.identity));
    let admin_gate = Arc::new(AdminGate::new(&config.identity));

    // ── Services ─────────────────────────────────────────────────
    let intake_service = Arc::new(IntakeService::new(
        submissions.clone(),
        objects.clone(),
        config.intake.clone(),
        config.store.buckets.clone(),
    ));
    let review_service = Arc::new(ReviewService::new(submissions.clone()));
    let catalog_service = Arc::new(CatalogService::new(submissions.clone()));
    let search = Arc::new(SearchCoordinator::new(
        catalog_service.clone(),
        Duration::from_millis(config.search.debounce_millis),
    ));
    let extractor = Arc::new(DocumentExtractor::new(&config.extraction)?);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        submissions,
        members,
        token_verifier,
        admin_gate,
        intake_service,
        review_service,
        catalog_service,
        search,
        extractor,
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_addr}: {e}")))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
