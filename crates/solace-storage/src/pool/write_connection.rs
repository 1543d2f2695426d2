//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use solace_core::errors::{SolaceResult, StorageError};

use crate::to_storage_err;

use super::pragmas;

/// Owns the one connection allowed to write. All mutations in the
/// workspace funnel through `with_conn_sync`.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> SolaceResult<Self> {
        let conn =
            Connection::open(path).map_err(|e| to_storage_err(format!("open writer: {e}")))?;
        pragmas::apply_writer_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> SolaceResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| to_storage_err(format!("open in-memory writer: {e}")))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(format!("in-memory pragmas: {e}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the write connection. The lock is held only
    /// for the duration of the closure and never across an await point.
    pub fn with_conn_sync<F, T>(&self, f: F) -> SolaceResult<T>
    where
        F: FnOnce(&Connection) -> SolaceResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| StorageError::ConnectionPoisoned)?;
        f(&guard)
    }
}
