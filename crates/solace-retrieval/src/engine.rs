//! RetrievalEngine: the query-time pipeline.
//! embed → nearest-neighbour search → drop sentinels → metadata join.

use std::collections::HashMap;
use std::sync::Arc;

use solace_core::config::RetrievalConfig;
use solace_core::constants::NO_MATCH_ID;
use solace_core::errors::{ConfigError, RetrievalError, SolaceResult};
use solace_core::models::RetrievedChunk;
use solace_core::traits::{IChunkStore, IEmbeddingProvider, IVectorIndex};
use tracing::{debug, info, warn};

/// Retrieval over the ingested corpus. Owns no durable state; the index
/// and the metadata store are shared read-only resources.
pub struct RetrievalEngine {
    embedder: Arc<dyn IEmbeddingProvider>,
    /// `None` when the index was unavailable at startup; every retrieve
    /// then reports `IndexUnavailable` so the caller can degrade.
    index: Option<Arc<dyn IVectorIndex>>,
    chunks: Arc<dyn IChunkStore>,
    config: RetrievalConfig,
}

impl std::fmt::Debug for RetrievalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalEngine")
            .field("index", &self.index.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RetrievalEngine {
    /// Build the engine. The embedding dimensionality must equal the
    /// index's; a mismatch means the corpus was ingested with a
    /// different scheme and is a fatal configuration error.
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        index: Option<Arc<dyn IVectorIndex>>,
        chunks: Arc<dyn IChunkStore>,
        config: RetrievalConfig,
    ) -> SolaceResult<Self> {
        if let Some(ref index) = index {
            if index.dimensions() != embedder.dimensions() {
                return Err(ConfigError::DimensionMismatch {
                    index: index.dimensions(),
                    embedding: embedder.dimensions(),
                }
                .into());
            }
        }
        Ok(Self {
            embedder,
            index,
            chunks,
            config,
        })
    }

    /// Retrieve up to `top_k` chunks for the query, best match first.
    ///
    /// Sentinel ids from an underfilled index are discarded; ids with no
    /// metadata row (ingestion corruption) are logged and skipped, never
    /// fatal. `IndexUnavailable` passes through untouched.
    pub async fn retrieve(&self, query_text: &str) -> SolaceResult<Vec<RetrievedChunk>> {
        let Some(index) = &self.index else {
            return Err(RetrievalError::IndexUnavailable {
                path: "<not configured>".to_string(),
                reason: "index was unavailable at startup".to_string(),
            }
            .into());
        };

        let query_vector = self.embedder.embed(query_text).await?;
        let hits = index.search(&query_vector, self.config.top_k)?;

        let ranked_ids: Vec<i64> = hits
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| *id != NO_MATCH_ID)
            .collect();

        if ranked_ids.is_empty() {
            debug!("index returned no usable candidates");
            return Ok(Vec::new());
        }

        let rows = self.chunks.chunks_by_vector_ids(&ranked_ids)?;
        let mut by_id: HashMap<i64, _> = rows.into_iter().map(|c| (c.vector_id, c)).collect();

        // Restore the index's distance ranking; the store returns rows
        // in its own order.
        let mut results = Vec::with_capacity(ranked_ids.len());
        for id in &ranked_ids {
            match by_id.remove(id) {
                Some(chunk) => results.push(RetrievedChunk {
                    book_name: chunk.book_name,
                    section: chunk.section,
                    content: chunk.content,
                }),
                None => {
                    warn!(vector_id = id, "index hit has no metadata row, skipping");
                }
            }
        }

        info!(
            requested = self.config.top_k,
            returned = results.len(),
            "retrieval complete"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::models::DocumentChunk;

    struct StubEmbedder {
        dims: usize,
    }

    #[async_trait::async_trait]
    impl IEmbeddingProvider for StubEmbedder {
        async fn embed(&self, _text: &str) -> SolaceResult<Vec<f32>> {
            let mut v = vec![0.0; self.dims];
            v[0] = 1.0;
            Ok(v)
        }

        fn dimensions(&self) -> usize {
            self.dims
        }

        fn name(&self) -> &str {
            "stub-embedder"
        }
    }

    fn corpus_store() -> Arc<solace_storage::StorageEngine> {
        let store = solace_storage::StorageEngine::open_in_memory().unwrap();
        for (vector_id, book) in [(0, "Feeling Good"), (1, "The Happiness Trap")] {
            store
                .insert_chunk(&DocumentChunk {
                    vector_id,
                    book_name: book.to_string(),
                    section: format!("Section {vector_id}"),
                    topic: None,
                    content: "excerpt".to_string(),
                    metadata: None,
                })
                .unwrap();
        }
        Arc::new(store)
    }

    fn two_vector_index() -> Arc<dyn IVectorIndex> {
        Arc::new(
            solace_index::FlatIndex::from_vectors(4, &[
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
            ])
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn retrieve_joins_and_preserves_rank_order() {
        let engine = RetrievalEngine::new(
            Arc::new(StubEmbedder { dims: 4 }),
            Some(two_vector_index()),
            corpus_store(),
            RetrievalConfig { top_k: 2 },
        )
        .unwrap();

        let chunks = engine.retrieve("how do I reframe negative thoughts").await.unwrap();
        assert_eq!(chunks.len(), 2);
        // Vector 0 is the best match for the stub query.
        assert_eq!(chunks[0].book_name, "Feeling Good");
        assert_eq!(chunks[1].book_name, "The Happiness Trap");
    }

    #[tokio::test]
    async fn sentinel_ids_are_discarded() {
        // k exceeds the index size, so the index pads with sentinels.
        let engine = RetrievalEngine::new(
            Arc::new(StubEmbedder { dims: 4 }),
            Some(two_vector_index()),
            corpus_store(),
            RetrievalConfig { top_k: 10 },
        )
        .unwrap();

        let chunks = engine.retrieve("anything").await.unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[tokio::test]
    async fn dangling_ids_are_skipped_not_fatal() {
        // Index has 3 vectors but the store only has metadata for 2.
        let index: Arc<dyn IVectorIndex> = Arc::new(
            solace_index::FlatIndex::from_vectors(4, &[
                vec![1.0, 0.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0, 0.0],
                vec![0.9, 0.1, 0.0, 0.0],
            ])
            .unwrap(),
        );
        let engine = RetrievalEngine::new(
            Arc::new(StubEmbedder { dims: 4 }),
            Some(index),
            corpus_store(),
            RetrievalConfig { top_k: 3 },
        )
        .unwrap();

        let chunks = engine.retrieve("anything").await.unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[tokio::test]
    async fn missing_index_reports_unavailable() {
        let engine = RetrievalEngine::new(
            Arc::new(StubEmbedder { dims: 4 }),
            None,
            corpus_store(),
            RetrievalConfig::default(),
        )
        .unwrap();

        let err = engine.retrieve("anything").await.unwrap_err();
        assert!(matches!(
            err,
            solace_core::SolaceError::Retrieval(RetrievalError::IndexUnavailable { .. })
        ));
    }

    #[test]
    fn dimension_mismatch_is_fatal_at_construction() {
        let result = RetrievalEngine::new(
            Arc::new(StubEmbedder { dims: 8 }),
            Some(two_vector_index()), // 4-dim index
            corpus_store(),
            RetrievalConfig::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            solace_core::SolaceError::Config(ConfigError::DimensionMismatch { .. })
        ));
    }
}
