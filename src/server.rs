//! HTTP server hosting the binding

use crate::api::{build_router, AppState};
use crate::binding::ChromaBinding;
use crate::config::ServerConfig;
use crate::shutdown::shutdown_signal;
use std::future::Future;
use tracing::info;

/// Serve the binding until `shutdown` resolves
pub async fn start_server<F>(
    config: &ServerConfig,
    binding: ChromaBinding,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(AppState { binding }, config.max_body_size_mb * 1024 * 1024);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Serve the binding until Ctrl+C or SIGTERM
pub async fn run(config: &ServerConfig, binding: ChromaBinding) -> Result<(), Box<dyn std::error::Error>> {
    start_server(config, binding, shutdown_signal()).await
}
