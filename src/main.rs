//! Service entry point: logging, configuration, and the HTTP server.

use std::sync::Arc;

use deckrs::Store;
use deckrs::api;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the bind address.
const ADDR_ENV: &str = "DECKRS_ADDR";
/// Bind address used when the environment does not provide one.
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let store = Arc::new(Store::new());
    let app = api::router(store);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "deckrs listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
