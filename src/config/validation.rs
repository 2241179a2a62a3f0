//! Configuration validation

use super::*;
use crate::error::{BindingError, Result};
use reqwest::Url;

/// Validate complete binding configuration
pub fn validate_config(config: &BindingConfig) -> Result<()> {
    validate_url(&config.url)?;
    Ok(())
}

/// Validate the Chroma server URL
fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(BindingError::Config(
            "missing url field from metadata".to_string()
        ));
    }

    let parsed = Url::parse(url)
        .map_err(|e| BindingError::Config(format!("invalid url '{}': {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BindingError::Config(
            "Chroma URL must start with http:// or https://".to_string()
        ));
    }

    if parsed.cannot_be_a_base() || parsed.host_str().map_or(true, str::is_empty) {
        return Err(BindingError::Config(format!("invalid url '{}': missing host", url)));
    }

    Ok(())
}

/// Validate the standalone host configuration
pub fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(BindingError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if config.host.is_empty() {
        return Err(BindingError::Config(
            "Server host cannot be empty".to_string()
        ));
    }

    Ok(())
}
