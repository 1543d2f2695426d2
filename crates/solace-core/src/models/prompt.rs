use serde::{Deserialize, Serialize};

use super::Role;

/// One role-tagged turn in a generation request. History is passed as
/// separate prior turns, never flattened into the current message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTurn {
    pub role: Role,
    pub text: String,
}

impl PromptTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// A fully assembled request for the generative model service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_instruction: String,
    /// Prior turns followed by the current (context-augmented) user message.
    pub turns: Vec<PromptTurn>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// When true, provider content filters are configured to their least
    /// restrictive setting. The Crisis Gate is the authoritative safety
    /// control, not the provider's filter.
    pub disable_safety_filters: bool,
}
