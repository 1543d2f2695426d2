//! Error taxonomy for the Solace engine.
//!
//! One enum per subsystem, wrapped by the umbrella [`SolaceError`].
//! Classification and retrieval errors are swallowed at their component
//! boundaries; everything else propagates through `SolaceResult`.

mod classify_error;
mod config_error;
mod embedding_error;
mod generation_error;
mod retrieval_error;
mod storage_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum SolaceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across every Solace crate.
pub type SolaceResult<T> = Result<T, SolaceError>;
