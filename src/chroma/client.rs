//! Chroma REST client implementation

use super::models::{Collection, CreateCollectionBody, CreateCollectionParams, GetCollectionOptions, Heartbeat, HNSW_SPACE_KEY};
use super::ChromaStore;
use crate::error::{ChromaError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the Chroma `/api/v1` REST API
pub struct ChromaClient {
    base_url: Url,
    http_client: Client,
}

impl ChromaClient {
    /// Create a new client bound to `url`.
    ///
    /// `timeout` bounds every request end to end; `None` leaves requests unbounded.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self> {
        info!("Connecting to Chroma at {}", url);

        let base_url = Url::parse(url).map_err(|e| ChromaError::InvalidUrl(format!("{}: {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ChromaError::InvalidUrl(url.to_string()).into());
        }

        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            debug!("Chroma request timeout set to {:?}", timeout);
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ChromaError::NetworkError)?;

        Ok(Self { base_url, http_client })
    }

    /// Build `<base>/api/v1/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").push("v1").extend(segments);
        }
        url
    }

    /// Send a request and decode the JSON body of a successful response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(ChromaError::NetworkError)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Chroma request failed with status {}: {}", status, body);
            return Err(ChromaError::ApiError { status: status.as_u16(), body }.into());
        }

        let bytes = response.bytes().await.map_err(ChromaError::NetworkError)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ChromaError::DecodingError(e.to_string()).into())
    }

    async fn fetch_collection(&self, name: &str) -> Result<Collection> {
        let request = self.http_client.get(self.endpoint(&["collections", name]));
        match self.send::<Collection>(request).await {
            Err(crate::error::BindingError::Upstream(ChromaError::ApiError { status, .. }))
                if status == StatusCode::NOT_FOUND.as_u16() =>
            {
                Err(ChromaError::CollectionNotFound(name.to_string()).into())
            }
            other => other,
        }
    }
}

#[async_trait]
impl ChromaStore for ChromaClient {
    async fn reset(&self) -> Result<bool> {
        debug!("Resetting Chroma database");
        self.send(self.http_client.post(self.endpoint(&["reset"]))).await
    }

    async fn version(&self) -> Result<String> {
        debug!("Getting Chroma version");
        self.send(self.http_client.get(self.endpoint(&["version"]))).await
    }

    async fn heartbeat(&self) -> Result<Heartbeat> {
        debug!("Sending Chroma heartbeat");
        self.send(self.http_client.get(self.endpoint(&["heartbeat"]))).await
    }

    async fn create_collection(&self, params: CreateCollectionParams) -> Result<Collection> {
        debug!("Creating collection: {}", params.name);

        let mut metadata = params.metadata.unwrap_or_default();
        metadata.insert(
            HNSW_SPACE_KEY.to_string(),
            serde_json::Value::from(params.distance.as_str()),
        );

        let body = CreateCollectionBody {
            name: &params.name,
            metadata,
            get_or_create: params.get_or_create,
        };

        let collection: Collection = self
            .send(self.http_client.post(self.endpoint(&["collections"])).json(&body))
            .await?;

        info!("Collection created: {}", collection.name);
        Ok(collection.with_embedding_function(Some(params.embedding.function())))
    }

    async fn delete_collection(&self, name: &str) -> Result<Collection> {
        debug!("Deleting collection: {}", name);

        let collection = self.fetch_collection(name).await?;

        let response = self
            .http_client
            .delete(self.endpoint(&["collections", name]))
            .send()
            .await
            .map_err(ChromaError::NetworkError)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Deleting collection {} failed with status {}: {}", name, status, body);
            return Err(ChromaError::ApiError { status: status.as_u16(), body }.into());
        }

        info!("Collection deleted: {}", name);
        Ok(collection.with_embedding_function(None))
    }

    async fn list_collections(&self) -> Result<Vec<Collection>> {
        debug!("Listing collections");

        let collections: Vec<Collection> = self
            .send(self.http_client.get(self.endpoint(&["collections"])))
            .await?;

        debug!("Found {} collections", collections.len());
        Ok(collections
            .into_iter()
            .map(|c| c.with_embedding_function(None))
            .collect())
    }

    async fn get_collection(&self, name: &str, options: GetCollectionOptions) -> Result<Collection> {
        debug!("Getting collection: {}", name);

        let collection = self.fetch_collection(name).await?;
        Ok(collection.with_embedding_function(options.embedding.map(|e| e.function())))
    }
}
