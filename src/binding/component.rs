//! The Chroma output binding component

use super::handlers::handler_for;
use super::operation::OperationKind;
use super::request::InvokeRequest;
use super::response::{InvokeResponse, ResponseBuilder};
use crate::chroma::{ChromaClient, ChromaStore};
use crate::config::BindingConfig;
use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};

/// Output binding exposing Chroma operations.
///
/// Configuration and store handle are fixed at construction; clones share
/// both, so a single instance can serve concurrent invocations.
#[derive(Clone)]
pub struct ChromaBinding {
    config: Arc<BindingConfig>,
    store: Arc<dyn ChromaStore>,
}

impl ChromaBinding {
    /// Initialize from raw component properties, connecting a REST client
    pub fn init(properties: &HashMap<String, String>) -> Result<Self> {
        let config = BindingConfig::from_properties(properties)?;
        let client = ChromaClient::new(&config.url, config.timeout())?;

        info!(
            "Chroma binding initialized (url={}, defaultEmbeddingFunction={})",
            config.url, config.default_embedding_function
        );
        Ok(Self::with_store(config, Arc::new(client)))
    }

    /// Build a binding around an existing store implementation
    pub fn with_store(config: BindingConfig, store: Arc<dyn ChromaStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub(crate) fn store(&self) -> &dyn ChromaStore {
        self.store.as_ref()
    }

    /// Non-secret configuration for the host to display
    pub fn component_metadata(&self) -> HashMap<String, String> {
        self.config.component_metadata()
    }

    /// Operations this binding supports, in advertised order
    pub fn operations(&self) -> &'static [OperationKind] {
        &OperationKind::ALL
    }

    /// Run one operation.
    ///
    /// Errors from any stage are returned as-is; no response (and no timing
    /// metadata) is produced for a failed call.
    pub async fn invoke(&self, request: &InvokeRequest) -> Result<InvokeResponse> {
        let operation: OperationKind = request.operation.parse().map_err(|e| {
            warn!("Rejected operation '{}'", request.operation);
            e
        })?;

        let span = tracing::info_span!("invoke", operation = %operation);
        async move {
            let builder = ResponseBuilder::start(operation);
            if operation.takes_payload() {
                debug!("Dispatching {} ({} payload bytes)", operation, request.data.len());
            } else {
                debug!("Dispatching {} (payload ignored)", operation);
            }

            let handler = handler_for(operation);
            let data = handler(self, &request.data).await.map_err(|e| {
                warn!("Operation {} failed: {}", operation, e);
                e
            })?;

            let response = builder.finish(data);
            debug!(
                "Operation {} completed in {}",
                operation,
                response.metadata.get(super::response::DURATION_KEY).map(String::as_str).unwrap_or("")
            );
            Ok(response)
        }
        .instrument(span)
        .await
    }
}
