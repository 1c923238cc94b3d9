//! Embedding configuration types

use kb_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use kb_providers::embedding::{HashEmbeddingProvider, TokenizationMode};
use serde::{Deserialize, Serialize};

/// Embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Number of components in every vector
    pub dimensions: usize,
    /// Tokenization mode of the hash embedder
    pub mode: TokenizationMode,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
            mode: TokenizationMode::default(),
        }
    }
}

impl EmbeddingConfig {
    /// Build the embedder described by this configuration
    pub fn provider(&self) -> HashEmbeddingProvider {
        HashEmbeddingProvider::with_mode(self.dimensions, self.mode)
    }
}
