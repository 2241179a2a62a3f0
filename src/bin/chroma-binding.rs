//! Chroma Binding Server Binary
//!
//! Runs the binding as a standalone HTTP sidecar. Configuration is read from
//! `CONFIG_PATH` (default `binding.toml`) with `CHROMA_BINDING__*` overrides.

use anyhow::Context;
use chroma_binding::{
    binding::ChromaBinding,
    config::loader::load_host_config_with_env,
    observability::init_observability,
    server,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "binding.toml".to_string());
    let host = load_host_config_with_env(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;

    init_observability(&host.logging.level, &host.logging.format);

    info!("Starting Chroma Binding Server");
    info!("Configuration loaded and validated from {}", config_path);

    let binding = ChromaBinding::init(&host.properties).context("failed to initialize binding")?;
    info!(
        "Supported operations: {}",
        chroma_binding::binding::OperationKind::supported_list()
    );

    server::run(&host.server, binding)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
