//! Invoke requests and per-operation payload validation

use crate::chroma::DistanceFunction;
use crate::embedding::EmbeddingFunction;
use crate::error::{BindingError, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A single invocation as handed over by the host
#[derive(Debug, Clone, Default)]
pub struct InvokeRequest {
    /// Operation name, not yet validated
    pub operation: String,

    /// Raw payload; only read by operations that take parameters
    pub data: Bytes,

    /// Host-supplied request metadata
    pub metadata: HashMap<String, String>,
}

impl InvokeRequest {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = data.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Payload of `createCollection`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,

    #[serde(default)]
    pub get_or_create: bool,

    #[serde(default)]
    pub embedding_function: String,

    #[serde(default)]
    pub distance_function: String,
}

impl CreateCollectionRequest {
    /// Decode and validate a raw payload
    pub fn decode(data: &[u8]) -> Result<Self> {
        let request: Self = decode_json(data, "createCollection")?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;

        if self.embedding_function.parse::<EmbeddingFunction>().is_err() {
            warn!("Validation failed: embeddingFunction '{}'", self.embedding_function);
            return Err(BindingError::Validation(
                "incorrect embeddingFunction field from request".to_string()
            ));
        }

        if self.distance_function.parse::<DistanceFunction>().is_err() {
            warn!("Validation failed: distanceFunction '{}'", self.distance_function);
            return Err(BindingError::Validation(
                "incorrect distanceFunction field from request".to_string()
            ));
        }

        Ok(())
    }
}

/// Payload of `deleteCollection` and `getCollection`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionNameRequest {
    #[serde(default)]
    pub name: String,
}

impl CollectionNameRequest {
    /// Decode and validate a raw payload for `operation`
    pub fn decode(data: &[u8], operation: &str) -> Result<Self> {
        let request: Self = decode_json(data, operation)?;
        validate_name(&request.name)?;
        Ok(request)
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(data: &[u8], operation: &str) -> Result<T> {
    serde_json::from_slice(data).map_err(|e| {
        warn!("Validation failed: undecodable {} payload: {}", operation, e);
        BindingError::Validation(format!("invalid {} payload: {}", operation, e))
    })
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        warn!("Validation failed: empty collection name");
        return Err(BindingError::Validation("missing name field from request".to_string()));
    }
    Ok(())
}
