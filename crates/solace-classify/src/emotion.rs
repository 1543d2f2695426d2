//! Hybrid emotion classifier.
//!
//! The keyword tier always runs and is total (floors to `[Neutral]`).
//! The model tier runs only when a generative provider is configured and
//! the message is non-trivial; any failure there falls back silently to
//! the keyword result. No error escapes `classify`.

use std::sync::Arc;

use serde::Deserialize;
use solace_core::config::ClassifyConfig;
use solace_core::constants::{MAX_MODEL_EMOTIONS, MIN_MODEL_TIER_TOKENS};
use solace_core::errors::{ClassifyError, SolaceResult};
use solace_core::models::{
    DetectionMethod, EmotionLabel, EmotionReading, GenerationRequest, Intensity, PromptTurn,
};
use solace_core::traits::IGenerativeModel;
use tracing::debug;

const CLASSIFICATION_PROMPT: &str = r#"You are an emotion detection classifier for a mental wellness application.

Analyze the following user message and return ONLY a JSON object with this exact format:
{
  "emotions": ["<emotion1>", "<emotion2>"],
  "intensity": "<low|medium|high>",
  "short_reason": "<one sentence>"
}

Valid emotions: anxious, depressed, angry, stressed, lonely, hopeful, neutral, sad, happy, overwhelmed
Pick 1-3 emotions that best describe the message. Always include intensity.
Return only valid JSON, no extra text."#;

/// Strict single-object reply expected from the model tier.
#[derive(Deserialize)]
struct ModelReply {
    #[serde(default)]
    emotions: Vec<String>,
    #[serde(default)]
    intensity: Option<String>,
    /// Present in the contract; discarded.
    #[serde(default, rename = "short_reason")]
    _short_reason: Option<String>,
}

/// Two-tier classifier. Holds an optional generative provider; without
/// one it is pure and deterministic.
pub struct EmotionClassifier {
    model: Option<Arc<dyn IGenerativeModel>>,
    model_id: String,
    config: ClassifyConfig,
}

impl EmotionClassifier {
    /// Keyword tier only, used when no API credential is configured.
    pub fn keyword_only() -> Self {
        Self {
            model: None,
            model_id: String::new(),
            config: ClassifyConfig::default(),
        }
    }

    /// Keyword tier plus the remote model tier.
    pub fn with_model(model: Arc<dyn IGenerativeModel>, config: ClassifyConfig) -> Self {
        Self {
            model: Some(model),
            model_id: config.model.clone(),
            config,
        }
    }

    /// Classify a user message. Infallible: the worst case is the
    /// keyword tier's neutral floor.
    pub async fn classify(&self, text: &str) -> EmotionReading {
        let keyword_reading = keyword_tier(text);

        // The model tier only sees non-trivial messages.
        let Some(model) = &self.model else {
            return keyword_reading;
        };
        if text.split_whitespace().count() <= MIN_MODEL_TIER_TOKENS {
            return keyword_reading;
        }

        match self.model_tier(model.as_ref(), text).await {
            Ok(reading) => reading,
            Err(e) => {
                debug!(error = %e, "model tier failed, using keyword result");
                keyword_reading
            }
        }
    }

    async fn model_tier(
        &self,
        model: &dyn IGenerativeModel,
        text: &str,
    ) -> SolaceResult<EmotionReading> {
        let excerpt: String = text.chars().take(self.config.input_chars).collect();
        let request = GenerationRequest {
            system_instruction: CLASSIFICATION_PROMPT.to_string(),
            turns: vec![PromptTurn::user(format!("User message: \"{excerpt}\""))],
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
            disable_safety_filters: false,
        };

        let raw = model.generate(&self.model_id, &request).await?;
        parse_model_reply(&raw)
    }
}

/// Keyword tier: include a label when any of its trigger phrases appears
/// as a case-insensitive substring. Total: never returns an empty set.
pub fn keyword_tier(text: &str) -> EmotionReading {
    let lowered = text.to_lowercase();
    let mut detected: Vec<EmotionLabel> = Vec::new();
    for label in EmotionLabel::ALL {
        if label
            .trigger_phrases()
            .iter()
            .any(|phrase| lowered.contains(phrase))
        {
            detected.push(label);
        }
    }
    if detected.is_empty() {
        detected.push(EmotionLabel::Neutral);
    }
    EmotionReading {
        emotions: detected,
        intensity: Intensity::Medium,
        method: DetectionMethod::Keyword,
    }
}

/// Parse the model reply: strip markdown fences, demand a single JSON
/// object, drop labels outside the vocabulary, cap at three, default
/// intensity to medium.
fn parse_model_reply(raw: &str) -> SolaceResult<EmotionReading> {
    let cleaned = strip_code_fences(raw);
    let reply: ModelReply =
        serde_json::from_str(cleaned).map_err(|e| ClassifyError::MalformedReply {
            reason: e.to_string(),
        })?;

    let mut emotions: Vec<EmotionLabel> = Vec::new();
    for name in &reply.emotions {
        if let Some(label) = EmotionLabel::parse(name) {
            if !emotions.contains(&label) {
                emotions.push(label);
            }
        }
    }
    emotions.truncate(MAX_MODEL_EMOTIONS);

    if emotions.is_empty() {
        return Err(ClassifyError::MalformedReply {
            reason: "no valid emotion labels in reply".to_string(),
        }
        .into());
    }

    let intensity = reply
        .intensity
        .as_deref()
        .map(Intensity::parse_or_default)
        .unwrap_or_default();

    Ok(EmotionReading {
        emotions,
        intensity,
        method: DetectionMethod::Model,
    })
}

/// Models often wrap JSON in ``` fences despite instructions.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}
