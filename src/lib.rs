//! Chroma Binding - validated operation dispatch for the Chroma vector database
//!
//! This library exposes a fixed set of named operations (`reset`, `version`,
//! `heartbeat`, `createCollection`, `deleteCollection`, `listCollections`,
//! `getCollection`) against a Chroma server. Callers hand over an operation
//! name and an opaque JSON payload; the binding validates the payload,
//! resolves embedding and distance functions, calls Chroma, and wraps the
//! result with timing metadata.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chroma_binding::prelude::*;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let properties = HashMap::from([
//!         ("url".to_string(), "http://localhost:8000".to_string()),
//!         ("openAIApiKey".to_string(), "sk-...".to_string()),
//!     ]);
//!     let binding = ChromaBinding::init(&properties)?;
//!
//!     let response = binding
//!         .invoke(&InvokeRequest::new("createCollection").with_data(
//!             r#"{"name":"docs","embeddingFunction":"openai","distanceFunction":"cosine"}"#,
//!         ))
//!         .await?;
//!     println!("{:?}", response.metadata);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod binding;
pub mod chroma;
pub mod config;
pub mod embedding;
pub mod error;
pub mod observability;
pub mod server;
pub mod shutdown;

pub use binding::ChromaBinding;
pub use config::BindingConfig;
pub use error::{BindingError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::binding::{ChromaBinding, InvokeRequest, InvokeResponse, OperationKind};
    pub use crate::chroma::{ChromaClient, ChromaStore, Collection, DistanceFunction, Heartbeat};
    pub use crate::config::BindingConfig;
    pub use crate::embedding::{EmbeddingCapability, EmbeddingFunction};
    pub use crate::error::{BindingError, ChromaError, Result};
}
