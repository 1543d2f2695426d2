/// Solace system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel id a vector index returns for padded "no match" slots
/// when it holds fewer vectors than the requested `k`.
pub const NO_MATCH_ID: i64 = -1;

/// Maximum emotion labels accepted from the model-tier classifier.
pub const MAX_MODEL_EMOTIONS: usize = 3;

/// Minimum whitespace-token count before the model classification tier runs.
pub const MIN_MODEL_TIER_TOKENS: usize = 3;

/// Characters of the user message stored alongside each emotion record.
pub const EMOTION_SNIPPET_CHARS: usize = 300;

/// Characters of each retrieved chunk injected into the prompt context block.
pub const CONTEXT_EXCERPT_CHARS: usize = 500;

/// Ceiling, in words, the system instruction imposes on generated replies.
pub const RESPONSE_WORD_CEILING: usize = 250;
