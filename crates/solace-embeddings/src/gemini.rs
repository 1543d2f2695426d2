//! Gemini `embedContent` provider.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use solace_core::config::EmbeddingConfig;
use solace_core::errors::{EmbeddingError, SolaceResult};
use solace_core::traits::IEmbeddingProvider;
use tracing::debug;

use crate::validate::validate_dimensions;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedRequest<'a> {
    content: ContentPayload<'a>,
    output_dimensionality: usize,
}

#[derive(Serialize)]
struct ContentPayload<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

/// Remote embedding provider backed by the Gemini REST API.
///
/// Must use the same model and dimensionality the corpus was ingested
/// with; `embed` validates the returned vector length on every call.
pub struct GeminiEmbedder {
    api_key: String,
    config: EmbeddingConfig,
    client: reqwest::Client,
}

impl GeminiEmbedder {
    pub fn new(api_key: String, config: EmbeddingConfig, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            config,
            client,
        }
    }
}

#[async_trait::async_trait]
impl IEmbeddingProvider for GeminiEmbedder {
    async fn embed(&self, text: &str) -> SolaceResult<Vec<f32>> {
        let url = format!(
            "{API_BASE}/models/{}:embedContent?key={}",
            self.config.model, self.api_key
        );
        let body = EmbedRequest {
            content: ContentPayload {
                parts: [TextPart { text }],
            },
            output_dimensionality: self.config.dimensions,
        };

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let detail = res.text().await.unwrap_or_default();
            return Err(EmbeddingError::RequestFailed {
                reason: format!("HTTP {status}: {detail}"),
            }
            .into());
        }

        let parsed: EmbedResponse = res.json().await.map_err(|e| {
            EmbeddingError::MalformedResponse {
                reason: e.to_string(),
            }
        })?;

        validate_dimensions(&parsed.embedding.values, self.config.dimensions)?;
        debug!(dims = parsed.embedding.values.len(), "embedded query");
        Ok(parsed.embedding.values)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
