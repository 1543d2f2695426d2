//! Data model shared across the workspace.

mod chunk;
mod emotion;
mod prompt;
mod response;
mod turn;

pub use chunk::{DocumentChunk, RetrievedChunk, SourceRef};
pub use emotion::{DetectionMethod, EmotionLabel, EmotionReading, EmotionRecord, Intensity};
pub use prompt::{GenerationRequest, PromptTurn};
pub use response::ConsultResponse;
pub use turn::{Role, Turn};
