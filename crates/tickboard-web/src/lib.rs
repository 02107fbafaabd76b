//! Dashboard API server for tickboard.
//!
//! Wires the core access gate and column mapping into an HTTP surface:
//! session boundary, gating middleware, series/table endpoints, and the
//! data-fetch layer.

pub mod config;
pub mod error;
pub mod fetch;
pub mod gate_layer;
pub mod responses;
pub mod routes;
pub mod sessions;
pub mod state;

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::ServeArgs;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid bind address '{0}'")]
    InvalidBind(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub async fn serve(args: ServeArgs) -> Result<(), ServeError> {
    let state = AppState::from_args(&args);
    let addr = format!("{}:{}", args.bind, args.port)
        .parse::<SocketAddr>()
        .map_err(|_| ServeError::InvalidBind(format!("{}:{}", args.bind, args.port)))?;

    let app = routes::api_router(state);

    tracing::info!("tickboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received, stopping");
    }
}
