use serde::{Deserialize, Serialize};

use super::defaults;

/// Emotion classifier configuration (model tier only; the keyword tier
/// has no tunables).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    pub model: String,
    /// Low temperature keeps the classification consistent.
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Characters of the user message forwarded to the model tier.
    pub input_chars: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_CLASSIFY_MODEL.to_string(),
            temperature: defaults::DEFAULT_CLASSIFY_TEMPERATURE,
            max_output_tokens: defaults::DEFAULT_CLASSIFY_MAX_TOKENS,
            input_chars: defaults::DEFAULT_CLASSIFY_INPUT_CHARS,
        }
    }
}
