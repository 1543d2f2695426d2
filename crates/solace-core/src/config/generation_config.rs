use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Ordered fallback list of model ids, primary first.
    pub models: Vec<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Whole-request timeout per model attempt. The chain's effective
    /// bound is this times the list length.
    pub request_timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            models: defaults::DEFAULT_GENERATION_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            max_output_tokens: defaults::DEFAULT_MAX_OUTPUT_TOKENS,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
