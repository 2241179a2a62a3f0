//! Configuration management for the Chroma binding

use crate::embedding::EmbeddingFunction;
use crate::error::{BindingError, Result};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub mod duration;
pub mod loader;
pub mod validation;

pub use duration::{format_duration, parse_duration};

/// Property holding the Chroma server URL
pub const URL_PROPERTY: &str = "url";
/// Property holding the timeout applied to every Chroma request
pub const OPERATION_TIMEOUT_PROPERTY: &str = "operationTimeout";
pub const OPENAI_API_KEY_PROPERTY: &str = "openAIApiKey";
pub const COHERE_API_KEY_PROPERTY: &str = "cohereApiKey";
pub const HUGGING_FACE_API_KEY_PROPERTY: &str = "huggingFaceApiKey";
pub const DEFAULT_EMBEDDING_FUNCTION_PROPERTY: &str = "defaultEmbeddingFunction";

/// Immutable binding configuration resolved from component properties
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Chroma server URL
    pub url: String,

    /// Per-request timeout; zero means unset
    pub operation_timeout: Duration,

    /// OpenAI API key (secured)
    pub openai_api_key: Option<Secret<String>>,

    /// Cohere API key (secured)
    pub cohere_api_key: Option<Secret<String>>,

    /// Hugging Face API key (secured)
    pub hugging_face_api_key: Option<Secret<String>>,

    /// Embedding function used when a request does not name one
    pub default_embedding_function: EmbeddingFunction,
}

/// Configuration for the standalone HTTP host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Raw component properties, as a sidecar would hand them over
    #[serde(default)]
    pub properties: HashMap<String, String>,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Server host
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Maximum request body size in MB (0 = unlimited)
    #[serde(default = "default_max_body_size")]
    pub max_body_size_mb: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            host: default_server_host(),
            max_body_size_mb: default_max_body_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_server_port() -> u16 { 3500 }
fn default_server_host() -> String { "0.0.0.0".to_string() }
fn default_max_body_size() -> usize { 4 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl BindingConfig {
    /// Build configuration from raw component properties.
    ///
    /// Property names are matched case-insensitively, so maps that went
    /// through a lower-casing config source still resolve.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let props: HashMap<String, &str> = properties
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.as_str()))
            .collect();
        let get = |key: &str| props.get(&key.to_lowercase()).copied().unwrap_or("");

        let default_embedding_function = match get(DEFAULT_EMBEDDING_FUNCTION_PROPERTY) {
            "" => EmbeddingFunction::default(),
            value => value.parse::<EmbeddingFunction>().map_err(|_| {
                BindingError::Config(format!(
                    "incorrect {} field from metadata: {}",
                    DEFAULT_EMBEDDING_FUNCTION_PROPERTY, value
                ))
            })?,
        };

        let operation_timeout = match get(OPERATION_TIMEOUT_PROPERTY) {
            "" => Duration::ZERO,
            value => parse_duration(value).map_err(|e| {
                BindingError::Config(format!(
                    "incorrect {} field from metadata: {}",
                    OPERATION_TIMEOUT_PROPERTY, e
                ))
            })?,
        };

        let config = Self {
            url: get(URL_PROPERTY).trim().to_string(),
            operation_timeout,
            openai_api_key: secret_property(get(OPENAI_API_KEY_PROPERTY)),
            cohere_api_key: secret_property(get(COHERE_API_KEY_PROPERTY)),
            hugging_face_api_key: secret_property(get(HUGGING_FACE_API_KEY_PROPERTY)),
            default_embedding_function,
        };

        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Timeout to apply to Chroma requests, if one was configured
    pub fn timeout(&self) -> Option<Duration> {
        if self.operation_timeout.is_zero() {
            None
        } else {
            Some(self.operation_timeout)
        }
    }

    /// Non-secret view of the configuration, keyed by property name
    pub fn component_metadata(&self) -> HashMap<String, String> {
        HashMap::from([
            (URL_PROPERTY.to_string(), self.url.clone()),
            (
                OPERATION_TIMEOUT_PROPERTY.to_string(),
                format_duration(self.operation_timeout),
            ),
            (
                DEFAULT_EMBEDDING_FUNCTION_PROPERTY.to_string(),
                self.default_embedding_function.to_string(),
            ),
        ])
    }
}

fn secret_property(value: &str) -> Option<Secret<String>> {
    if value.is_empty() {
        None
    } else {
        Some(Secret::new(value.to_string()))
    }
}
