/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The vector index is absent or cannot be opened. Distinguishable
    /// from an empty result so the pipeline can degrade to no citations.
    #[error("vector index unavailable at {path}: {reason}")]
    IndexUnavailable { path: String, reason: String },

    #[error("index search failed: {reason}")]
    SearchFailed { reason: String },
}
