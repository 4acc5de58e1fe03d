//! HTTP layer: axum router, handlers and shared state.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::{AppState, SharedState};

use crate::error::Result;
use std::net::SocketAddr;
use tracing::info;

/// Serve `state` on `addr` until Ctrl+C.
pub async fn run_server(state: SharedState, addr: SocketAddr) -> Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(addr = %listener.local_addr()?, "Serving climate API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
