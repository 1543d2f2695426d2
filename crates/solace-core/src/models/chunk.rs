use serde::{Deserialize, Serialize};

/// Metadata row for one ingested document chunk.
///
/// `vector_id` matches exactly one position in the vector index. A search
/// hit whose id has no row here indicates ingestion corruption and is
/// treated as absent context, not a fatal error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub vector_id: i64,
    pub book_name: String,
    pub section: String,
    pub topic: Option<String>,
    pub content: String,
    /// Page number, token count, and other ingestion-time extras.
    pub metadata: Option<serde_json::Value>,
}

/// A retrieval hit, in index rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub book_name: String,
    pub section: String,
    pub content: String,
}

/// A source citation returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub book: String,
    pub section: String,
}

impl From<&RetrievedChunk> for SourceRef {
    fn from(chunk: &RetrievedChunk) -> Self {
        Self {
            book: chunk.book_name.clone(),
            section: chunk.section.clone(),
        }
    }
}
