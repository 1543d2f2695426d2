//! The per-message pipeline: gate, classify and retrieve in parallel,
//! assemble the prompt, generate with fallback, persist the exchange.

use std::sync::Arc;

use solace_classify::{CrisisGate, EmotionClassifier, EMERGENCY_RESPONSE};
use solace_core::config::{GenerationConfig, MemoryConfig};
use solace_core::errors::{RetrievalError, SolaceError, SolaceResult};
use solace_core::models::{ConsultResponse, EmotionRecord, SourceRef};
use solace_core::traits::{IEmotionStore, IMessageStore};
use solace_generation::{build_consult_request, FallbackChain};
use solace_retrieval::RetrievalEngine;
use tracing::{debug, error, info, warn};

/// Returned verbatim when every generation model has failed. The user
/// still deserves an answer, just an honest one.
pub const SERVICE_UNAVAILABLE_RESPONSE: &str = "\
I'm sorry, I'm having trouble responding right now. Please give me a \
moment and try again. If you need support urgently, please reach out \
to someone you trust or a local helpline.";

/// Orchestrates one consultation session pipeline. Every collaborator
/// is injected at construction; nothing is created lazily on the
/// request path.
pub struct ConsultEngine {
    gate: CrisisGate,
    classifier: EmotionClassifier,
    retrieval: RetrievalEngine,
    chain: FallbackChain,
    messages: Arc<dyn IMessageStore>,
    emotions: Arc<dyn IEmotionStore>,
    memory: MemoryConfig,
    generation: GenerationConfig,
}

impl ConsultEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gate: CrisisGate,
        classifier: EmotionClassifier,
        retrieval: RetrievalEngine,
        chain: FallbackChain,
        messages: Arc<dyn IMessageStore>,
        emotions: Arc<dyn IEmotionStore>,
        memory: MemoryConfig,
        generation: GenerationConfig,
    ) -> Self {
        Self {
            gate,
            classifier,
            retrieval,
            chain,
            messages,
            emotions,
            memory,
            generation,
        }
    }

    /// Run the full pipeline for one user message.
    ///
    /// Crisis messages short-circuit before any remote call. Retrieval
    /// failures degrade to an uncited reply. Generation exhaustion
    /// degrades to a fixed unavailability message. Storage failures on
    /// the normal path propagate; the conversation log is the one thing
    /// this pipeline must not silently lose.
    pub async fn process_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> SolaceResult<ConsultResponse> {
        let gate = self.gate.evaluate(text);
        if gate.is_crisis {
            info!(session = session_id, "crisis gate fired");
            let canned = gate.canned_response.unwrap_or(EMERGENCY_RESPONSE);
            self.messages
                .record_exchange(session_id, text, canned, true, None)?;
            return Ok(ConsultResponse {
                session_id: session_id.to_string(),
                response_text: canned.to_string(),
                is_crisis: true,
                sources: Vec::new(),
                emotions: Vec::new(),
                emotion_intensity: None,
                generation_degraded: false,
            });
        }

        let history = self.messages.history(session_id, self.memory.window)?;

        let (reading, retrieved) =
            tokio::join!(self.classifier.classify(text), self.retrieval.retrieve(text));

        let chunks = match retrieved {
            Ok(chunks) => chunks,
            Err(SolaceError::Retrieval(RetrievalError::IndexUnavailable { path, reason })) => {
                debug!(%path, %reason, "index unavailable, replying without context");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "retrieval failed, replying without context");
                Vec::new()
            }
        };

        let request = build_consult_request(
            &history,
            &chunks,
            text,
            self.generation.temperature,
            self.generation.max_output_tokens,
        );

        match self.chain.generate(&request).await {
            Ok(reply) => {
                self.messages
                    .record_exchange(session_id, text, &reply, false, Some(&reading))?;
                Ok(ConsultResponse {
                    session_id: session_id.to_string(),
                    response_text: reply,
                    is_crisis: false,
                    sources: chunks.iter().map(SourceRef::from).collect(),
                    emotions: reading.emotions,
                    emotion_intensity: Some(reading.intensity),
                    generation_degraded: false,
                })
            }
            Err(e) => {
                error!(session = session_id, error = %e, "generation exhausted");
                // Best-effort: the degraded exchange is still worth
                // keeping, but must not mask the degradation itself.
                if let Err(persist_err) = self.messages.record_exchange(
                    session_id,
                    text,
                    SERVICE_UNAVAILABLE_RESPONSE,
                    false,
                    Some(&reading),
                ) {
                    warn!(error = %persist_err, "failed to persist degraded exchange");
                }
                Ok(ConsultResponse {
                    session_id: session_id.to_string(),
                    response_text: SERVICE_UNAVAILABLE_RESPONSE.to_string(),
                    is_crisis: false,
                    sources: Vec::new(),
                    emotions: reading.emotions,
                    emotion_intensity: Some(reading.intensity),
                    generation_degraded: true,
                })
            }
        }
    }

    /// Most recent emotion observations for a session, newest first.
    pub fn mood_overview(
        &self,
        session_id: &str,
        limit: usize,
    ) -> SolaceResult<Vec<EmotionRecord>> {
        self.emotions.recent_emotions(session_id, limit)
    }

    /// Whether the session has ever tripped the crisis gate.
    pub fn session_has_crisis(&self, session_id: &str) -> SolaceResult<bool> {
        self.messages.session_has_crisis(session_id)
    }
}
