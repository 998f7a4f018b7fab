//! Bank Ledger Service - HTTP API over an in-memory ledger
//!
//! This is the main entry point for the bank-ledger service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_ledger_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bank_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bank Ledger Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        request_timeout_seconds = config.request_timeout_seconds,
        max_concurrent_requests = config.max_concurrent_requests,
        "Service configuration loaded"
    );

    // One ledger for the life of the process
    let state = AppState::with_empty_ledger(config.clone());

    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
