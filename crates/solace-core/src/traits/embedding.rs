use crate::errors::SolaceResult;

/// Embedding generation provider.
///
/// Must produce the same embedding scheme used at ingestion time; the
/// retrieval engine asserts `dimensions()` against the index at
/// construction.
#[async_trait::async_trait]
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
