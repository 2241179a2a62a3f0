//! Configuration loader with environment variable support

use super::{validation, HostConfig};
use crate::error::Result;
use config::{Environment, File};
use std::path::Path;

/// Load host configuration from a TOML file
pub fn load_host_config<P: AsRef<Path>>(path: P) -> Result<HostConfig> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: HostConfig = config.try_deserialize()?;
    validation::validate_server_config(&cfg.server)?;
    Ok(cfg)
}

/// Load host configuration from a TOML file with environment variable overrides
///
/// `CHROMA_BINDING__PROPERTIES__URL=http://chroma:8000` overrides `properties.url`.
pub fn load_host_config_with_env<P: AsRef<Path>>(path: P) -> Result<HostConfig> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix("CHROMA_BINDING")
                .separator("__")
                .try_parsing(true)
        )
        .build()?;

    let cfg: HostConfig = config.try_deserialize()?;
    validation::validate_server_config(&cfg.server)?;
    Ok(cfg)
}
