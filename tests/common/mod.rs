//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chroma_binding::chroma::models::HNSW_SPACE_KEY;
use chroma_binding::chroma::{ChromaStore, Collection, CreateCollectionParams, GetCollectionOptions, Heartbeat};
use chroma_binding::error::{ChromaError, Result};
use chroma_binding::{BindingConfig, ChromaBinding};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

pub const FAKE_VERSION: &str = "0.4.24";
pub const FAKE_HEARTBEAT: u64 = 1_700_000_000_000_000_000;

/// In-memory stand-in for a Chroma server
#[derive(Default)]
pub struct FakeStore {
    collections: Mutex<BTreeMap<String, Collection>>,
    calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of store calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn collection_names(&self) -> Vec<String> {
        self.collections.lock().await.keys().cloned().collect()
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChromaStore for FakeStore {
    async fn reset(&self) -> Result<bool> {
        self.record();
        self.collections.lock().await.clear();
        Ok(true)
    }

    async fn version(&self) -> Result<String> {
        self.record();
        Ok(FAKE_VERSION.to_string())
    }

    async fn heartbeat(&self) -> Result<Heartbeat> {
        self.record();
        Ok(Heartbeat { nanosecond_heartbeat: FAKE_HEARTBEAT })
    }

    async fn create_collection(&self, params: CreateCollectionParams) -> Result<Collection> {
        self.record();
        let mut collections = self.collections.lock().await;

        if let Some(existing) = collections.get(&params.name) {
            if params.get_or_create {
                return Ok(existing.clone());
            }
            return Err(ChromaError::ApiError {
                status: 409,
                body: format!("Collection {} already exists", params.name),
            }
            .into());
        }

        let mut metadata = params.metadata.unwrap_or_default();
        metadata.insert(HNSW_SPACE_KEY.to_string(), params.distance.as_str().into());

        let collection = Collection {
            id: Uuid::new_v4(),
            name: params.name.clone(),
            metadata: Some(metadata),
            tenant: None,
            database: None,
            embedding_function: Some(params.embedding.function()),
            distance_function: Some(params.distance),
        };
        collections.insert(params.name, collection.clone());
        Ok(collection)
    }

    async fn delete_collection(&self, name: &str) -> Result<Collection> {
        self.record();
        self.collections
            .lock()
            .await
            .remove(name)
            .ok_or_else(|| ChromaError::CollectionNotFound(name.to_string()).into())
    }

    async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.record();
        Ok(self.collections.lock().await.values().cloned().collect())
    }

    async fn get_collection(&self, name: &str, _options: GetCollectionOptions) -> Result<Collection> {
        self.record();
        self.collections
            .lock()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| ChromaError::CollectionNotFound(name.to_string()).into())
    }
}

pub fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Binding over a fresh fake store, with `extra` properties on top of the URL
pub fn binding_with(extra: &[(&str, &str)]) -> (ChromaBinding, Arc<FakeStore>) {
    let mut props = properties(&[("url", "http://localhost:8000")]);
    props.extend(properties(extra));

    let config = BindingConfig::from_properties(&props).expect("valid test properties");
    let store = FakeStore::new();
    (ChromaBinding::with_store(config, store.clone()), store)
}

/// Binding with an OpenAI credential configured
pub fn openai_binding() -> (ChromaBinding, Arc<FakeStore>) {
    binding_with(&[("openAIApiKey", "sk-test")])
}
