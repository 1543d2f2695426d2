/// Generative model service errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A single model endpoint failed. Swallowed by the fallback chain
    /// until the list is exhausted.
    #[error("model {model} failed: {reason}")]
    ModelFailed { model: String, reason: String },

    /// The model replied but carried no usable text candidate.
    #[error("model {model} returned no candidates")]
    EmptyResponse { model: String },

    /// Every configured model failed. Fatal for the turn.
    #[error("all {models_tried} configured models failed, last error: {last_error}")]
    Exhausted {
        models_tried: usize,
        last_error: String,
    },

    /// The chain was built with an empty model list.
    #[error("no generation models configured")]
    NoModelsConfigured,
}
