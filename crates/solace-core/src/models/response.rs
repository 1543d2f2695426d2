use serde::{Deserialize, Serialize};

use super::{EmotionLabel, Intensity, SourceRef};

/// Aggregate result of one `process_message` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultResponse {
    pub session_id: String,
    pub response_text: String,
    /// True when the Crisis Gate fired and `response_text` is the fixed
    /// emergency message.
    pub is_crisis: bool,
    /// Citations in retrieval rank order. Empty on crisis turns and when
    /// retrieval degraded.
    pub sources: Vec<SourceRef>,
    /// Detected emotions for this turn. Empty on crisis turns.
    pub emotions: Vec<EmotionLabel>,
    pub emotion_intensity: Option<Intensity>,
    /// True when every generation model failed and `response_text` is the
    /// fixed service-unavailable message. The underlying failure is logged
    /// at error level for the operator.
    pub generation_degraded: bool,
}
