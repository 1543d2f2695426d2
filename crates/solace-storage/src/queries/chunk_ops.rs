//! Document-chunk metadata queries.

use rusqlite::{params, Connection};

use solace_core::errors::SolaceResult;
use solace_core::models::DocumentChunk;

use crate::to_storage_err;

/// Batch-fetch metadata for the given vector ids. Row order follows the
/// store, not the id list; the retrieval engine restores rank order.
pub fn chunks_by_vector_ids(conn: &Connection, ids: &[i64]) -> SolaceResult<Vec<DocumentChunk>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT vector_id, book_name, section, topic, content, metadata_json
         FROM document_chunks
         WHERE vector_id IN ({placeholders})"
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
            let metadata: Option<String> = row.get(5)?;
            Ok(DocumentChunk {
                vector_id: row.get(0)?,
                book_name: row.get(1)?,
                section: row.get(2)?,
                topic: row.get(3)?,
                content: row.get(4)?,
                metadata: metadata.and_then(|m| serde_json::from_str(&m).ok()),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert one chunk row. Used by ingestion tooling and test fixtures.
pub fn insert_chunk(conn: &Connection, chunk: &DocumentChunk) -> SolaceResult<()> {
    let metadata = chunk
        .metadata
        .as_ref()
        .map(|m| m.to_string());
    conn.execute(
        "INSERT INTO document_chunks
            (vector_id, book_name, section, topic, content, metadata_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            chunk.vector_id,
            chunk.book_name,
            chunk.section,
            chunk.topic,
            chunk.content,
            metadata,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn chunk_count(conn: &Connection) -> SolaceResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM document_chunks", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
