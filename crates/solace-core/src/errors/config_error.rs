/// Configuration errors. Fatal at startup or first use, never per-request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cannot parse config: {reason}")]
    Parse { reason: String },

    /// Embedding dimensionality must equal the index dimensionality
    /// exactly; a mismatch means the index was built with a different
    /// embedding scheme.
    #[error("index dimensions ({index}) do not match embedding dimensions ({embedding})")]
    DimensionMismatch { index: usize, embedding: usize },

    #[error("no API key configured")]
    MissingApiKey,
}
