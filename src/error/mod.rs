//! Error types for the Chroma binding

use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Main error type for the binding
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("invalid operation type: {operation}. Expected {expected}")]
    UnsupportedOperation { operation: String, expected: String },

    #[error("Chroma error: {0}")]
    Upstream(#[from] ChromaError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors surfaced by the Chroma remote client
#[derive(Error, Debug)]
pub enum ChromaError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl BindingError {
    /// Stable label for the error category
    pub fn kind(&self) -> &'static str {
        match self {
            BindingError::Config(_) => "config",
            BindingError::Validation(_) => "validation",
            BindingError::Credential(_) => "credential",
            BindingError::Unimplemented(_) => "unimplemented",
            BindingError::UnsupportedOperation { .. } => "unsupported_operation",
            BindingError::Upstream(_) => "upstream",
            BindingError::Serialization(_) => "serialization",
        }
    }
}

impl From<config::ConfigError> for BindingError {
    fn from(err: config::ConfigError) -> Self {
        BindingError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BindingError {
    fn from(err: serde_json::Error) -> Self {
        BindingError::Serialization(err.to_string())
    }
}
