//! Engine configuration.
//!
//! One aggregate struct with per-subsystem sections, loadable from TOML.
//! Every field has a default so an empty file is a valid config.

pub mod defaults;

mod classify_config;
mod embedding_config;
mod generation_config;
mod memory_config;
mod retrieval_config;

pub use classify_config::ClassifyConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use memory_config::MemoryConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, SolaceResult};

/// Aggregate configuration for the Solace engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    /// Gemini API key. Falls back to the `GEMINI_API_KEY` environment
    /// variable when absent.
    pub api_key: Option<String>,
    pub database_path: PathBuf,
    pub index_path: PathBuf,
    pub memory: MemoryConfig,
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub classify: ClassifyConfig,
}

impl Default for SolaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            database_path: PathBuf::from(defaults::DEFAULT_DATABASE_PATH),
            index_path: PathBuf::from(defaults::DEFAULT_INDEX_PATH),
            memory: MemoryConfig::default(),
            retrieval: RetrievalConfig::default(),
            embedding: EmbeddingConfig::default(),
            generation: GenerationConfig::default(),
            classify: ClassifyConfig::default(),
        }
    }
}

impl SolaceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> SolaceResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Resolve the API key: explicit config wins, then environment.
    /// `None` disables the model classification tier; generation and
    /// embedding construction treat it as a missing-key config error.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| {
                std::env::var("GEMINI_API_KEY")
                    .ok()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
            })
    }
}
