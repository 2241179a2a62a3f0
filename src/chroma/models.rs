//! Data models for Chroma requests and responses

use crate::embedding::{EmbeddingCapability, EmbeddingFunction};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Metadata key Chroma reads the HNSW distance metric from
pub const HNSW_SPACE_KEY: &str = "hnsw:space";

/// Distance metrics supported by Chroma's HNSW index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceFunction {
    #[default]
    L2,
    Ip,
    Cosine,
}

impl DistanceFunction {
    pub const ALL: [DistanceFunction; 3] = [
        DistanceFunction::L2,
        DistanceFunction::Ip,
        DistanceFunction::Cosine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceFunction::L2 => "l2",
            DistanceFunction::Ip => "ip",
            DistanceFunction::Cosine => "cosine",
        }
    }
}

impl fmt::Display for DistanceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown distance function: {}", s))
    }
}

/// Collection descriptor as returned by Chroma
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Server-assigned identifier
    pub id: Uuid,

    /// Collection name, unique within the database
    pub name: String,

    /// Free-form collection metadata
    #[serde(default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Embedding function the collection was opened with, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_function: Option<EmbeddingFunction>,

    /// Distance metric read back from `hnsw:space`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_function: Option<DistanceFunction>,
}

impl Collection {
    /// Fill in fields that are derived rather than sent by the server
    pub(crate) fn with_embedding_function(mut self, function: Option<EmbeddingFunction>) -> Self {
        self.embedding_function = function;
        self.distance_function = self
            .metadata
            .as_ref()
            .and_then(|m| m.get(HNSW_SPACE_KEY))
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok());
        self
    }
}

/// Result of a heartbeat probe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heartbeat {
    #[serde(rename = "nanosecond heartbeat")]
    pub nanosecond_heartbeat: u64,
}

/// Parameters for creating a collection
#[derive(Debug, Clone)]
pub struct CreateCollectionParams {
    pub name: String,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    pub get_or_create: bool,
    pub embedding: EmbeddingCapability,
    pub distance: DistanceFunction,
}

/// Optional settings for fetching a collection
#[derive(Debug, Clone, Default)]
pub struct GetCollectionOptions {
    pub embedding: Option<EmbeddingCapability>,
}

/// Body of `POST /api/v1/collections`
#[derive(Debug, Serialize)]
pub(crate) struct CreateCollectionBody<'a> {
    pub name: &'a str,
    pub metadata: HashMap<String, serde_json::Value>,
    pub get_or_create: bool,
}
