//! One handler per operation kind

use super::component::ChromaBinding;
use super::operation::OperationKind;
use super::request::{CollectionNameRequest, CreateCollectionRequest};
use crate::chroma::{resolve_distance_function, CreateCollectionParams, GetCollectionOptions};
use crate::embedding::resolve_embedding_function;
use crate::error::Result;
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, info};

/// Handler signature shared by every entry of the dispatch table
pub(crate) type Handler = for<'a> fn(&'a ChromaBinding, &'a [u8]) -> BoxFuture<'a, Result<Bytes>>;

/// Dispatch table: exactly one handler per operation
pub(crate) fn handler_for(operation: OperationKind) -> Handler {
    match operation {
        OperationKind::Reset => reset,
        OperationKind::Version => version,
        OperationKind::Heartbeat => heartbeat,
        OperationKind::CreateCollection => create_collection,
        OperationKind::DeleteCollection => delete_collection,
        OperationKind::ListCollections => list_collections,
        OperationKind::GetCollection => get_collection,
    }
}

fn reset<'a>(binding: &'a ChromaBinding, _data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        let reset = binding.store().reset().await?;
        Ok(Bytes::from(reset.to_string()))
    }
    .boxed()
}

fn version<'a>(binding: &'a ChromaBinding, _data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        debug!("getting version");
        let version = binding.store().version().await?;
        Ok(Bytes::from(version))
    }
    .boxed()
}

fn heartbeat<'a>(binding: &'a ChromaBinding, _data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        debug!("getting heartbeat");
        let heartbeat = binding.store().heartbeat().await?;
        Ok(Bytes::from(serde_json::to_vec(&heartbeat)?))
    }
    .boxed()
}

fn create_collection<'a>(binding: &'a ChromaBinding, data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        let request = CreateCollectionRequest::decode(data)?;
        info!(
            "createCollection: name={} embeddingFunction={} getOrCreate={}",
            request.name, request.embedding_function, request.get_or_create
        );

        let embedding = resolve_embedding_function(binding.config(), &request.embedding_function)?;

        info!("distanceFunction: {}", request.distance_function);
        let distance = resolve_distance_function(&request.distance_function)?;

        let collection = binding
            .store()
            .create_collection(CreateCollectionParams {
                name: request.name,
                metadata: request.metadata,
                get_or_create: request.get_or_create,
                embedding,
                distance,
            })
            .await?;

        Ok(Bytes::from(serde_json::to_vec(&collection)?))
    }
    .boxed()
}

fn delete_collection<'a>(binding: &'a ChromaBinding, data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        let request = CollectionNameRequest::decode(data, OperationKind::DeleteCollection.as_str())?;
        let collection = binding.store().delete_collection(&request.name).await?;
        Ok(Bytes::from(serde_json::to_vec(&collection)?))
    }
    .boxed()
}

fn list_collections<'a>(binding: &'a ChromaBinding, _data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        let collections = binding.store().list_collections().await?;
        Ok(Bytes::from(serde_json::to_vec(&collections)?))
    }
    .boxed()
}

fn get_collection<'a>(binding: &'a ChromaBinding, data: &'a [u8]) -> BoxFuture<'a, Result<Bytes>> {
    async move {
        let request = CollectionNameRequest::decode(data, OperationKind::GetCollection.as_str())?;
        let collection = binding
            .store()
            .get_collection(&request.name, GetCollectionOptions::default())
            .await?;
        Ok(Bytes::from(serde_json::to_vec(&collection)?))
    }
    .boxed()
}
