//! Chroma vector database integration

pub mod client;
pub mod distance;
pub mod models;

pub use client::ChromaClient;
pub use distance::resolve_distance_function;
pub use models::{
    Collection, CreateCollectionParams, DistanceFunction, GetCollectionOptions, Heartbeat,
};

use async_trait::async_trait;
use crate::error::Result;

/// Operations the binding needs from a Chroma server
#[async_trait]
pub trait ChromaStore: Send + Sync {
    /// Wipe the whole database
    async fn reset(&self) -> Result<bool>;

    /// Server version string
    async fn version(&self) -> Result<String>;

    /// Liveness probe
    async fn heartbeat(&self) -> Result<Heartbeat>;

    /// Create a collection (or open it when `get_or_create` is set)
    async fn create_collection(&self, params: CreateCollectionParams) -> Result<Collection>;

    /// Delete a collection, returning what was deleted
    async fn delete_collection(&self, name: &str) -> Result<Collection>;

    /// List all collections
    async fn list_collections(&self) -> Result<Vec<Collection>>;

    /// Fetch a single collection by name
    async fn get_collection(&self, name: &str, options: GetCollectionOptions) -> Result<Collection>;
}
