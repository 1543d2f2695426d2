use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding provider configuration.
///
/// `dimensions` must equal the dimensionality the index was built with;
/// the retrieval engine rejects a mismatch at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
