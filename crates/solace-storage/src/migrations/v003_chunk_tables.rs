//! v003: document-chunk metadata. Written by the ingestion pipeline,
//! read-only to the request path.

use rusqlite::Connection;

pub fn apply(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE document_chunks (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            vector_id      INTEGER NOT NULL UNIQUE,
            book_name      TEXT NOT NULL,
            section        TEXT NOT NULL,
            topic          TEXT,
            content        TEXT NOT NULL,
            metadata_json  TEXT
        );
        CREATE INDEX idx_chunks_book ON document_chunks(book_name);",
    )
}
