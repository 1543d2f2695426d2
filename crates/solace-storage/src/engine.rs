//! StorageEngine owns the ConnectionPool, implements the message,
//! emotion, and chunk store traits, runs migrations at startup.

use std::path::Path;

use solace_core::constants::EMOTION_SNIPPET_CHARS;
use solace_core::errors::SolaceResult;
use solace_core::models::{DocumentChunk, EmotionReading, EmotionRecord, Role, Turn};
use solace_core::traits::{IChunkStore, IEmotionStore, IMessageStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{chunk_ops, emotion_ops, message_ops};

/// The main storage engine. Owns the connection pool and provides the
/// full message + emotion + chunk interface.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// When true, use the read pool for read operations (file-backed
    /// mode). When false, route all reads through the writer (in-memory
    /// mode, because in-memory read pool connections are isolated
    /// databases).
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> SolaceResult<Self> {
        let pool = ConnectionPool::open(path, 4)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> SolaceResult<Self> {
        let pool = ConnectionPool::open_in_memory(1)?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> SolaceResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> SolaceResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> SolaceResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }

    /// Insert a chunk metadata row. Exposed for ingestion tooling and
    /// test fixtures; the request path never writes chunks.
    pub fn insert_chunk(&self, chunk: &DocumentChunk) -> SolaceResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| chunk_ops::insert_chunk(conn, chunk))
    }
}

/// Truncate a message to the stored snippet length without splitting a
/// character.
fn snippet_of(text: &str) -> String {
    text.chars().take(EMOTION_SNIPPET_CHARS).collect()
}

impl IMessageStore for StorageEngine {
    fn history(&self, session_id: &str, window: usize) -> SolaceResult<Vec<Turn>> {
        self.with_reader(|conn| message_ops::history_window(conn, session_id, window))
    }

    fn append(
        &self,
        session_id: &str,
        role: Role,
        content: &str,
        is_crisis: bool,
    ) -> SolaceResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            message_ops::insert_message(conn, session_id, role, content, is_crisis)
        })
    }

    fn record_exchange(
        &self,
        session_id: &str,
        user_text: &str,
        model_text: &str,
        is_crisis: bool,
        emotion: Option<&EmotionReading>,
    ) -> SolaceResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            conn.execute_batch("BEGIN")
                .map_err(|e| crate::to_storage_err(format!("begin exchange: {e}")))?;

            let result = (|| {
                message_ops::insert_message(conn, session_id, Role::User, user_text, is_crisis)?;
                message_ops::insert_message(conn, session_id, Role::Model, model_text, is_crisis)?;
                if let Some(reading) = emotion {
                    emotion_ops::insert_emotion(conn, session_id, &snippet_of(user_text), reading)?;
                }
                Ok(())
            })();

            match result {
                Ok(()) => conn
                    .execute_batch("COMMIT")
                    .map_err(|e| crate::to_storage_err(format!("commit exchange: {e}"))),
                Err(e) => {
                    let _ = conn.execute_batch("ROLLBACK");
                    Err(e)
                }
            }
        })
    }

    fn session_has_crisis(&self, session_id: &str) -> SolaceResult<bool> {
        self.with_reader(|conn| message_ops::session_has_crisis(conn, session_id))
    }
}

impl IEmotionStore for StorageEngine {
    fn insert_emotion(
        &self,
        session_id: &str,
        snippet: &str,
        reading: &EmotionReading,
    ) -> SolaceResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            emotion_ops::insert_emotion(conn, session_id, &snippet_of(snippet), reading)
        })
    }

    fn recent_emotions(&self, session_id: &str, limit: usize) -> SolaceResult<Vec<EmotionRecord>> {
        self.with_reader(|conn| emotion_ops::recent_for_session(conn, session_id, limit))
    }
}

impl IChunkStore for StorageEngine {
    fn chunks_by_vector_ids(&self, ids: &[i64]) -> SolaceResult<Vec<DocumentChunk>> {
        self.with_reader(|conn| chunk_ops::chunks_by_vector_ids(conn, ids))
    }

    fn chunk_count(&self) -> SolaceResult<usize> {
        self.with_reader(chunk_ops::chunk_count)
    }
}
