use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed vocabulary of emotion labels the classifier may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Anxious,
    Depressed,
    Angry,
    Stressed,
    Lonely,
    Hopeful,
    Neutral,
    Sad,
    Happy,
    Overwhelmed,
}

impl EmotionLabel {
    /// Every label, in the order the keyword tier scans them.
    pub const ALL: [EmotionLabel; 10] = [
        EmotionLabel::Anxious,
        EmotionLabel::Depressed,
        EmotionLabel::Angry,
        EmotionLabel::Stressed,
        EmotionLabel::Lonely,
        EmotionLabel::Hopeful,
        EmotionLabel::Neutral,
        EmotionLabel::Sad,
        EmotionLabel::Happy,
        EmotionLabel::Overwhelmed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Depressed => "depressed",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Stressed => "stressed",
            EmotionLabel::Lonely => "lonely",
            EmotionLabel::Hopeful => "hopeful",
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Overwhelmed => "overwhelmed",
        }
    }

    /// Parse a label string. Returns `None` for anything outside the
    /// vocabulary so model-tier hallucinations can be dropped silently.
    pub fn parse(s: &str) -> Option<EmotionLabel> {
        EmotionLabel::ALL.iter().copied().find(|l| l.as_str() == s)
    }

    /// Trigger phrases for the keyword tier. A label applies when any of
    /// its phrases appears as a case-insensitive substring.
    pub fn trigger_phrases(&self) -> &'static [&'static str] {
        match self {
            EmotionLabel::Anxious => &[
                "anxious",
                "anxiety",
                "nervous",
                "worried",
                "panic",
                "panicking",
                "scared",
                "fear",
                "dreading",
            ],
            EmotionLabel::Depressed => &[
                "depressed",
                "depression",
                "hopeless",
                "worthless",
                "empty",
                "numb",
                "meaningless",
            ],
            EmotionLabel::Angry => &[
                "angry",
                "anger",
                "furious",
                "rage",
                "frustrated",
                "irritated",
                "annoyed",
            ],
            EmotionLabel::Stressed => &[
                "stressed",
                "stress",
                "pressure",
                "burnt out",
                "burnout",
                "exhausted",
                "overwhelmed",
            ],
            EmotionLabel::Lonely => &[
                "lonely",
                "alone",
                "isolated",
                "no one",
                "nobody cares",
                "disconnected",
            ],
            EmotionLabel::Hopeful => &[
                "hopeful",
                "optimistic",
                "excited",
                "looking forward",
                "better",
                "improving",
            ],
            // Neutral is the floor, never keyword-triggered.
            EmotionLabel::Neutral => &[],
            EmotionLabel::Sad => &[
                "sad",
                "unhappy",
                "crying",
                "cry",
                "tears",
                "grief",
                "loss",
                "heartbroken",
            ],
            EmotionLabel::Happy => &[
                "happy", "great", "wonderful", "joy", "joyful", "fantastic", "amazing", "proud",
            ],
            EmotionLabel::Overwhelmed => &[
                "overwhelmed",
                "too much",
                "can't cope",
                "falling apart",
                "breaking down",
            ],
        }
    }
}

/// Detected intensity of an emotional state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    /// Parse, defaulting to `Medium` when the acting tier leaves it
    /// unspecified or emits something outside the vocabulary.
    pub fn parse_or_default(s: &str) -> Intensity {
        match s {
            "low" => Intensity::Low,
            "high" => Intensity::High,
            _ => Intensity::Medium,
        }
    }
}

/// Which tier produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Keyword,
    Model,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Keyword => "keyword",
            DetectionMethod::Model => "model",
        }
    }

    pub fn parse(s: &str) -> DetectionMethod {
        match s {
            "model" => DetectionMethod::Model,
            _ => DetectionMethod::Keyword,
        }
    }
}

/// The classifier's output for a single user turn.
///
/// `emotions` is never empty: the keyword tier floors to `[Neutral]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub emotions: Vec<EmotionLabel>,
    pub intensity: Intensity,
    pub method: DetectionMethod,
}

impl EmotionReading {
    /// A neutral keyword-tier reading, used for crisis turns and as the
    /// all-else-failed floor.
    pub fn neutral() -> Self {
        Self {
            emotions: vec![EmotionLabel::Neutral],
            intensity: Intensity::Medium,
            method: DetectionMethod::Keyword,
        }
    }
}

/// A persisted emotion observation, one per non-crisis user turn.
/// Append-only; never revised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionRecord {
    pub id: i64,
    pub session_id: String,
    /// First 300 characters of the triggering user message.
    pub message_snippet: String,
    pub emotions: Vec<EmotionLabel>,
    pub intensity: Intensity,
    pub detection_method: DetectionMethod,
    pub created_at: DateTime<Utc>,
}
