use crate::errors::SolaceResult;
use crate::models::{DocumentChunk, EmotionReading, EmotionRecord, Role, Turn};

/// Conversation log persistence. The store exclusively owns turn rows.
pub trait IMessageStore: Send + Sync {
    /// At most `window` most-recent turns for the session, oldest first.
    fn history(&self, session_id: &str, window: usize) -> SolaceResult<Vec<Turn>>;

    /// Append a single turn. One durable write, never batched with other
    /// sessions.
    fn append(&self, session_id: &str, role: Role, content: &str, is_crisis: bool)
        -> SolaceResult<()>;

    /// Persist a full exchange (user turn, model turn, optional emotion
    /// record) in one transaction, so a crash never leaves an orphaned
    /// user turn.
    fn record_exchange(
        &self,
        session_id: &str,
        user_text: &str,
        model_text: &str,
        is_crisis: bool,
        emotion: Option<&EmotionReading>,
    ) -> SolaceResult<()>;

    /// Whether any turn in the session has been flagged as a crisis.
    fn session_has_crisis(&self, session_id: &str) -> SolaceResult<bool>;
}

/// Append-only emotion observations, one per non-crisis user turn.
pub trait IEmotionStore: Send + Sync {
    fn insert_emotion(
        &self,
        session_id: &str,
        snippet: &str,
        reading: &EmotionReading,
    ) -> SolaceResult<()>;

    /// Most recent records for a session, newest first. Feeds the mood
    /// trend view.
    fn recent_emotions(&self, session_id: &str, limit: usize) -> SolaceResult<Vec<EmotionRecord>>;
}

/// Read access to the document-chunk metadata the ingestion pipeline
/// produced. The pipeline never writes here.
pub trait IChunkStore: Send + Sync {
    /// Batch-fetch metadata rows for the given vector ids. Rows come back
    /// in store order; callers re-rank by their id ordering.
    fn chunks_by_vector_ids(&self, ids: &[i64]) -> SolaceResult<Vec<DocumentChunk>>;

    fn chunk_count(&self) -> SolaceResult<usize>;
}
