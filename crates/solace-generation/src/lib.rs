//! Response generation: a Gemini `generateContent` client, an ordered
//! fallback chain over a prioritized model list, and the consultation
//! prompt assembler.

pub mod chain;
pub mod gemini;
pub mod prompt;

pub use chain::FallbackChain;
pub use gemini::GeminiClient;
pub use prompt::{build_consult_request, format_context_block, CONSULT_SYSTEM_PROMPT};
