//! NLQ Server Library
//!
//! HTTP surface of the service:
//! - `POST /query`: question in, matching student records out
//! - `GET /health`: store reachability and the active model provider

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use handlers::{run_query, QueryOutcome, QueryRequest, NO_DOCUMENTS_MESSAGE};
pub use routes::router;
pub use state::AppState;

use nlq_core::{AppError, AppResult};
use std::net::SocketAddr;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!("HTTP listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
