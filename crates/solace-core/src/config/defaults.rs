//! Default values for every tunable.

pub const DEFAULT_DATABASE_PATH: &str = "./data/solace.db";
pub const DEFAULT_INDEX_PATH: &str = "./data/solace_index.bin";

/// Sliding-window size for conversation context.
pub const DEFAULT_MEMORY_WINDOW: usize = 20;

pub const DEFAULT_TOP_K: usize = 4;

pub const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;

/// Fallback chain, primary first.
pub const DEFAULT_GENERATION_MODELS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-2.5-pro",
    "gemini-2.0-flash-lite",
];
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_CLASSIFY_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_CLASSIFY_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_CLASSIFY_MAX_TOKENS: u32 = 100;
/// Characters of the user message forwarded to the model tier.
pub const DEFAULT_CLASSIFY_INPUT_CHARS: usize = 500;
