//! Resolve an embedding function identifier into a usable capability

use super::{EmbeddingCapability, EmbeddingFunction};
use crate::config::BindingConfig;
use crate::error::{BindingError, Result};
use tracing::{debug, warn};

/// Resolve `identifier` against the configured credentials.
///
/// Only OpenAI is wired up; the other recognised providers fail loudly
/// rather than falling back to a different provider.
pub fn resolve_embedding_function(config: &BindingConfig, identifier: &str) -> Result<EmbeddingCapability> {
    let function = identifier
        .parse::<EmbeddingFunction>()
        .map_err(|_| BindingError::Validation("invalid embedding function".to_string()))?;

    match function {
        EmbeddingFunction::OpenAI => {
            let api_key = config.openai_api_key.clone().ok_or_else(|| {
                warn!("OpenAI embedding function requested without credential");
                BindingError::Credential("missing openAIApiKey field from metadata".to_string())
            })?;
            debug!("Resolved embedding function: {}", function);
            Ok(EmbeddingCapability::new(function, api_key))
        }
        EmbeddingFunction::Cohere | EmbeddingFunction::SentenceTransformers => Err(
            BindingError::Unimplemented(format!("{} embedding function not implemented yet", function)),
        ),
    }
}
