//! Embedding function selection
//!
//! The binding never computes embeddings. It only decides which provider a
//! collection is bound to and checks that the provider's credential exists.

pub mod resolver;

pub use resolver::resolve_embedding_function;

use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Embedding providers recognised by the binding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum EmbeddingFunction {
    #[default]
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "cohere")]
    Cohere,
    #[serde(rename = "sentenceTransformers")]
    SentenceTransformers,
}

impl EmbeddingFunction {
    pub const ALL: [EmbeddingFunction; 3] = [
        EmbeddingFunction::OpenAI,
        EmbeddingFunction::Cohere,
        EmbeddingFunction::SentenceTransformers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmbeddingFunction::OpenAI => "openai",
            EmbeddingFunction::Cohere => "cohere",
            EmbeddingFunction::SentenceTransformers => "sentenceTransformers",
        }
    }
}

impl fmt::Display for EmbeddingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmbeddingFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown embedding function: {}", s))
    }
}

/// A resolved embedding provider, bound to the credential it will use
#[derive(Debug, Clone)]
pub struct EmbeddingCapability {
    function: EmbeddingFunction,
    api_key: Secret<String>,
}

impl EmbeddingCapability {
    pub(crate) fn new(function: EmbeddingFunction, api_key: Secret<String>) -> Self {
        Self { function, api_key }
    }

    pub fn function(&self) -> EmbeddingFunction {
        self.function
    }

    pub fn api_key(&self) -> &Secret<String> {
        &self.api_key
    }
}
