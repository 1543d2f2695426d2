//! End-to-end pipeline tests over an in-memory store, a small real
//! vector index, and scripted remote providers.

use std::sync::{Arc, Mutex};

use solace_classify::{CrisisGate, EmotionClassifier};
use solace_core::config::{GenerationConfig, MemoryConfig, RetrievalConfig};
use solace_core::errors::{GenerationError, SolaceResult};
use solace_core::models::{
    DetectionMethod, DocumentChunk, EmotionLabel, GenerationRequest, Role,
};
use solace_core::traits::{IEmbeddingProvider, IGenerativeModel, IMessageStore, IVectorIndex};
use solace_engine::{ConsultEngine, SERVICE_UNAVAILABLE_RESPONSE};
use solace_generation::FallbackChain;
use solace_index::FlatIndex;
use solace_retrieval::RetrievalEngine;
use solace_storage::StorageEngine;

const DIMS: usize = 4;

/// Fixed-direction embedder so index ranking is deterministic.
struct StubEmbedder {
    vector: Vec<f32>,
}

#[async_trait::async_trait]
impl IEmbeddingProvider for StubEmbedder {
    async fn embed(&self, _text: &str) -> SolaceResult<Vec<f32>> {
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

/// Embedder that must never be reached.
struct PanickingEmbedder;

#[async_trait::async_trait]
impl IEmbeddingProvider for PanickingEmbedder {
    async fn embed(&self, _text: &str) -> SolaceResult<Vec<f32>> {
        panic!("embedder invoked on a short-circuited path");
    }

    fn dimensions(&self) -> usize {
        DIMS
    }

    fn name(&self) -> &str {
        "panicking-embedder"
    }
}

/// Generative provider with scripted per-model failures; records every
/// call it receives.
struct ScriptedProvider {
    failing_models: Vec<&'static str>,
    reply: String,
    calls: Mutex<Vec<(String, GenerationRequest)>>,
}

impl ScriptedProvider {
    fn new(failing_models: Vec<&'static str>, reply: &str) -> Self {
        Self {
            failing_models,
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn models_called(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    fn last_request(&self) -> GenerationRequest {
        self.calls.lock().unwrap().last().unwrap().1.clone()
    }
}

#[async_trait::async_trait]
impl IGenerativeModel for ScriptedProvider {
    async fn generate(
        &self,
        model_id: &str,
        request: &GenerationRequest,
    ) -> SolaceResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((model_id.to_string(), request.clone()));
        if self.failing_models.contains(&model_id) {
            return Err(GenerationError::ModelFailed {
                model: model_id.to_string(),
                reason: "scripted failure".to_string(),
            }
            .into());
        }
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Provider that must never be reached.
struct PanickingProvider;

#[async_trait::async_trait]
impl IGenerativeModel for PanickingProvider {
    async fn generate(
        &self,
        _model_id: &str,
        _request: &GenerationRequest,
    ) -> SolaceResult<String> {
        panic!("generation invoked on a short-circuited path");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

fn corpus_store() -> Arc<StorageEngine> {
    let store = StorageEngine::open_in_memory().unwrap();
    for (id, book, section, content) in [
        (0i64, "Feeling Good", "Ch. 1", "Thoughts shape moods."),
        (1, "Mind Over Mood", "Worksheet 3", "Name the feeling first."),
        (2, "The Anxiety Toolkit", "Part 2", "Ground yourself with breath."),
    ] {
        store
            .insert_chunk(&DocumentChunk {
                vector_id: id,
                book_name: book.to_string(),
                section: section.to_string(),
                topic: None,
                content: content.to_string(),
                metadata: None,
            })
            .unwrap();
    }
    Arc::new(store)
}

/// Index where vector 1 is the best match for [1,0,0,0], then 0, then 2.
fn corpus_index() -> Arc<dyn IVectorIndex> {
    let rows = vec![
        vec![0.8, 0.6, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
    ];
    Arc::new(FlatIndex::from_vectors(DIMS, &rows).unwrap())
}

struct Harness {
    engine: ConsultEngine,
    provider: Arc<ScriptedProvider>,
    store: Arc<StorageEngine>,
}

fn harness_with(failing_models: Vec<&'static str>, index: Option<Arc<dyn IVectorIndex>>) -> Harness {
    let store = corpus_store();
    let provider = Arc::new(ScriptedProvider::new(failing_models, "You are heard."));
    let embedder = Arc::new(StubEmbedder {
        vector: vec![1.0, 0.0, 0.0, 0.0],
    });
    let retrieval = RetrievalEngine::new(
        embedder,
        index,
        store.clone(),
        RetrievalConfig { top_k: 2 },
    )
    .unwrap();
    let chain = FallbackChain::new(
        provider.clone(),
        vec!["primary".to_string(), "secondary".to_string()],
    );
    let engine = ConsultEngine::new(
        CrisisGate::new(),
        EmotionClassifier::keyword_only(),
        retrieval,
        chain,
        store.clone(),
        store.clone(),
        MemoryConfig { window: 20 },
        GenerationConfig::default(),
    );
    Harness {
        engine,
        provider,
        store,
    }
}

fn harness() -> Harness {
    harness_with(vec![], Some(corpus_index()))
}

// ---------------------------------------------------------------
// Crisis short-circuit
// ---------------------------------------------------------------

#[tokio::test]
async fn crisis_message_short_circuits_every_remote_call() {
    let store = corpus_store();
    let retrieval = RetrievalEngine::new(
        Arc::new(PanickingEmbedder),
        Some(corpus_index()),
        store.clone(),
        RetrievalConfig::default(),
    )
    .unwrap();
    let chain = FallbackChain::new(Arc::new(PanickingProvider), vec!["m".to_string()]);
    let engine = ConsultEngine::new(
        CrisisGate::new(),
        EmotionClassifier::keyword_only(),
        retrieval,
        chain,
        store.clone(),
        store.clone(),
        MemoryConfig::default(),
        GenerationConfig::default(),
    );

    let res = engine
        .process_message("s1", "I want to kill myself")
        .await
        .unwrap();

    assert!(res.is_crisis);
    assert!(res.response_text.contains("crisis helpline"));
    assert!(res.sources.is_empty());
    assert!(res.emotions.is_empty());
    assert!(!res.generation_degraded);

    // Both turns carry the flag; no emotion record was written.
    let history = store.history("s1", 10).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|t| t.is_crisis));
    assert!(engine.session_has_crisis("s1").unwrap());
    assert!(engine.mood_overview("s1", 10).unwrap().is_empty());
}

// ---------------------------------------------------------------
// Normal flow
// ---------------------------------------------------------------

#[tokio::test]
async fn normal_message_round_trips_with_ranked_sources() {
    let h = harness();
    let res = h
        .engine
        .process_message("s1", "I have been feeling anxious about work")
        .await
        .unwrap();

    assert_eq!(res.response_text, "You are heard.");
    assert!(!res.is_crisis);
    assert!(!res.generation_degraded);
    // top_k = 2: exact-direction match first, then the close one.
    assert_eq!(res.sources.len(), 2);
    assert_eq!(res.sources[0].book, "Mind Over Mood");
    assert_eq!(res.sources[1].book, "Feeling Good");
    assert_eq!(res.emotions, vec![EmotionLabel::Anxious]);

    let history = h.store.history("s1", 10).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Model);
    assert!(history.iter().all(|t| !t.is_crisis));
}

#[tokio::test]
async fn prompt_carries_history_and_context_block() {
    let h = harness();
    h.engine.process_message("s1", "I feel sad today").await.unwrap();
    h.engine
        .process_message("s1", "still feeling pretty sad")
        .await
        .unwrap();

    let request = h.provider.last_request();
    // Two prior turns plus the current message.
    assert_eq!(request.turns.len(), 3);
    assert_eq!(request.turns[0].text, "I feel sad today");
    assert_eq!(request.turns[1].role, Role::Model);
    let current = &request.turns[2].text;
    assert!(current.contains("Reference material:"));
    assert!(current.ends_with("still feeling pretty sad"));
    assert!(!request.system_instruction.is_empty());
}

#[tokio::test]
async fn emotion_record_written_per_normal_turn() {
    let h = harness();
    h.engine
        .process_message("s1", "I am so stressed and overwhelmed")
        .await
        .unwrap();

    let records = h.engine.mood_overview("s1", 10).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].emotions.contains(&EmotionLabel::Stressed));
    assert!(records[0].emotions.contains(&EmotionLabel::Overwhelmed));
    assert_eq!(records[0].detection_method, DetectionMethod::Keyword);
}

// ---------------------------------------------------------------
// Degradation
// ---------------------------------------------------------------

#[tokio::test]
async fn fallback_model_answers_when_primary_fails() {
    let h = harness_with(vec!["primary"], Some(corpus_index()));
    let res = h.engine.process_message("s1", "rough week").await.unwrap();

    assert_eq!(res.response_text, "You are heard.");
    assert!(!res.generation_degraded);
    assert_eq!(h.provider.models_called(), vec!["primary", "secondary"]);
}

#[tokio::test]
async fn exhaustion_degrades_but_still_persists_the_exchange() {
    let h = harness_with(vec!["primary", "secondary"], Some(corpus_index()));
    let res = h.engine.process_message("s1", "rough week").await.unwrap();

    assert_eq!(res.response_text, SERVICE_UNAVAILABLE_RESPONSE);
    assert!(res.generation_degraded);
    assert!(res.sources.is_empty());

    let history = h.store.history("s1", 10).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].content, SERVICE_UNAVAILABLE_RESPONSE);
}

#[tokio::test]
async fn missing_index_degrades_to_uncited_reply() {
    let h = harness_with(vec![], None);
    let res = h.engine.process_message("s1", "rough week").await.unwrap();

    assert_eq!(res.response_text, "You are heard.");
    assert!(res.sources.is_empty());
    assert!(!res.generation_degraded);
    // The prompt holds the bare message, no reference block.
    let request = h.provider.last_request();
    assert_eq!(request.turns.last().unwrap().text, "rough week");
}

// ---------------------------------------------------------------
// Mood overview
// ---------------------------------------------------------------

#[tokio::test]
async fn mood_overview_is_newest_first_and_bounded() {
    let h = harness();
    h.engine.process_message("s1", "feeling sad").await.unwrap();
    h.engine.process_message("s1", "feeling angry").await.unwrap();
    h.engine.process_message("s1", "feeling happy").await.unwrap();

    let records = h.engine.mood_overview("s1", 2).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].emotions.contains(&EmotionLabel::Happy));
    assert!(records[1].emotions.contains(&EmotionLabel::Angry));
}
