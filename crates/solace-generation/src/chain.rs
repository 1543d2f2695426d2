//! Ordered fallback over a prioritized list of model ids.
//!
//! Models are tried strictly in configuration order. A failure on one
//! model is logged and the next is attempted; only when every model has
//! failed does the chain surface an error.

use std::sync::Arc;

use solace_core::errors::{GenerationError, SolaceResult};
use solace_core::models::GenerationRequest;
use solace_core::traits::IGenerativeModel;
use tracing::{info, warn};

pub struct FallbackChain {
    provider: Arc<dyn IGenerativeModel>,
    models: Vec<String>,
}

impl FallbackChain {
    pub fn new(provider: Arc<dyn IGenerativeModel>, models: Vec<String>) -> Self {
        Self { provider, models }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Runs the request against each model in order, returning the first
    /// successful reply.
    pub async fn generate(&self, request: &GenerationRequest) -> SolaceResult<String> {
        if self.models.is_empty() {
            return Err(GenerationError::NoModelsConfigured.into());
        }

        let mut last_error = String::new();
        for (rank, model_id) in self.models.iter().enumerate() {
            match self.provider.generate(model_id, request).await {
                Ok(text) => {
                    if rank > 0 {
                        info!(model = %model_id, rank, "fallback model answered");
                    }
                    return Ok(text);
                }
                Err(e) => {
                    warn!(model = %model_id, error = %e, "model failed, trying next");
                    last_error = e.to_string();
                }
            }
        }

        Err(GenerationError::Exhausted {
            models_tried: self.models.len(),
            last_error,
        }
        .into())
    }
}
