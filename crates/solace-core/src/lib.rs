//! # solace-core
//!
//! Foundation crate for the Solace consultation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SolaceConfig;
pub use errors::{SolaceError, SolaceResult};
pub use models::{
    ConsultResponse, DetectionMethod, DocumentChunk, EmotionLabel, EmotionReading, EmotionRecord,
    GenerationRequest, Intensity, PromptTurn, RetrievedChunk, Role, SourceRef, Turn,
};
