use crate::errors::SolaceResult;

/// Nearest-neighbour search over embedding vectors.
///
/// `search` returns exactly `k` `(id, score)` pairs ranked best-first,
/// padding with [`crate::constants::NO_MATCH_ID`] when the index holds
/// fewer than `k` vectors. Callers must discard sentinel ids.
pub trait IVectorIndex: Send + Sync {
    fn search(&self, query: &[f32], k: usize) -> SolaceResult<Vec<(i64, f32)>>;

    /// Dimensionality the index was built with.
    fn dimensions(&self) -> usize;

    /// Number of vectors in the index.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
