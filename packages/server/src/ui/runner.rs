//! Server startup and shutdown.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use super::{
    reaper::spawn_presence_reaper, router::build_router, signal::shutdown_signal, state::AppState,
};
use crate::config::{ConfigError, ServerConfig};

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the server until a shutdown signal arrives.
///
/// Storage is ready before the listener binds, so no request can reach an
/// uninitialized store.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    let state = Arc::new(AppState::in_memory(config.inactivity_threshold()));
    let reaper = spawn_presence_reaper(state.clone(), config.reaper_interval());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on http://{}", addr);

    let result = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve);

    reaper.abort();
    tracing::info!("Server stopped");
    result
}
