use solace_core::errors::{EmbeddingError, SolaceResult};

/// Reject an embedding whose dimensionality differs from the expected
/// one. A mismatch means the provider and the index disagree on the
/// embedding scheme and retrieval results would be garbage.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> SolaceResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
