//! Engine construction from configuration.
//!
//! Everything is built once, up front. A missing vector index is the
//! one tolerated absence: the engine starts and retrieval degrades. A
//! missing API key or a dimensionality mismatch is fatal.

use std::sync::Arc;

use solace_classify::{CrisisGate, EmotionClassifier};
use solace_core::config::SolaceConfig;
use solace_core::errors::{ConfigError, SolaceResult};
use solace_core::traits::{IGenerativeModel, IVectorIndex};
use solace_embeddings::GeminiEmbedder;
use solace_generation::{FallbackChain, GeminiClient};
use solace_index::FlatIndex;
use solace_retrieval::RetrievalEngine;
use solace_storage::StorageEngine;
use tracing::{info, warn};

use crate::engine::ConsultEngine;

/// Build a fully wired [`ConsultEngine`] from configuration.
pub fn build_engine(config: &SolaceConfig) -> SolaceResult<ConsultEngine> {
    let api_key = config
        .resolve_api_key()
        .ok_or(ConfigError::MissingApiKey)?;

    let storage = Arc::new(StorageEngine::open(&config.database_path)?);

    let index: Option<Arc<dyn IVectorIndex>> = match FlatIndex::open(&config.index_path) {
        Ok(index) => {
            info!(
                path = %config.index_path.display(),
                vectors = index.len(),
                "vector index loaded"
            );
            Some(Arc::new(index))
        }
        Err(e) => {
            warn!(error = %e, "vector index unavailable, retrieval will degrade");
            None
        }
    };

    let embedder = Arc::new(GeminiEmbedder::new(
        api_key.clone(),
        config.embedding.clone(),
        config.generation.request_timeout_secs,
    ));
    let provider: Arc<dyn IGenerativeModel> = Arc::new(GeminiClient::new(
        api_key,
        config.generation.request_timeout_secs,
    ));

    let retrieval = RetrievalEngine::new(
        embedder,
        index,
        storage.clone(),
        config.retrieval.clone(),
    )?;
    let classifier = EmotionClassifier::with_model(provider.clone(), config.classify.clone());
    let chain = FallbackChain::new(provider, config.generation.models.clone());

    Ok(ConsultEngine::new(
        CrisisGate::new(),
        classifier,
        retrieval,
        chain,
        storage.clone(),
        storage,
        config.memory.clone(),
        config.generation.clone(),
    ))
}
