//! Startup pragma configuration.

use rusqlite::Connection;
use solace_core::errors::SolaceResult;

use crate::to_storage_err;

/// Apply pragmas for a file-backed write connection.
pub fn apply_writer_pragmas(conn: &Connection) -> SolaceResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(|e| to_storage_err(format!("writer pragmas: {e}")))
}

/// Apply pragmas for read-only pool connections.
pub fn apply_reader_pragmas(conn: &Connection) -> SolaceResult<()> {
    conn.execute_batch(
        "PRAGMA query_only = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(|e| to_storage_err(format!("reader pragmas: {e}")))
}
