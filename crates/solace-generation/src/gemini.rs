//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use solace_core::errors::{GenerationError, SolaceResult};
use solace_core::models::GenerationRequest;
use solace_core::traits::IGenerativeModel;
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    system_instruction: ContentPayload<'a>,
    contents: Vec<TurnPayload<'a>>,
    generation_config: GenerationConfigPayload,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct ContentPayload<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TurnPayload<'a> {
    role: &'a str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigPayload {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Remote generative provider backed by the Gemini REST API.
///
/// Model selection happens per call so a single client can serve the
/// whole fallback list.
pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            client,
        }
    }

    fn safety_settings(disable_filters: bool) -> Vec<SafetySetting> {
        if !disable_filters {
            return Vec::new();
        }
        // Wellness conversations routinely mention self-harm and distress;
        // the crisis gate handles those before a model ever sees them.
        HARM_CATEGORIES
            .iter()
            .map(|category| SafetySetting {
                category,
                threshold: "BLOCK_NONE",
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl IGenerativeModel for GeminiClient {
    async fn generate(&self, model_id: &str, request: &GenerationRequest) -> SolaceResult<String> {
        let url = format!(
            "{API_BASE}/models/{model_id}:generateContent?key={}",
            self.api_key
        );
        let body = GenerateBody {
            system_instruction: ContentPayload {
                parts: [TextPart {
                    text: &request.system_instruction,
                }],
            },
            contents: request
                .turns
                .iter()
                .map(|turn| TurnPayload {
                    role: turn.role.as_str(),
                    parts: [TextPart { text: &turn.text }],
                })
                .collect(),
            generation_config: GenerationConfigPayload {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
            safety_settings: Self::safety_settings(request.disable_safety_filters),
        };

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::ModelFailed {
                model: model_id.to_string(),
                reason: e.to_string(),
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let detail = res.text().await.unwrap_or_default();
            return Err(GenerationError::ModelFailed {
                model: model_id.to_string(),
                reason: format!("HTTP {status}: {detail}"),
            }
            .into());
        }

        let parsed: GenerateResponse =
            res.json().await.map_err(|e| GenerationError::ModelFailed {
                model: model_id.to_string(),
                reason: format!("unparseable response: {e}"),
            })?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default();

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse {
                model: model_id.to_string(),
            }
            .into());
        }

        debug!(model = model_id, chars = text.len(), "generated response");
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
