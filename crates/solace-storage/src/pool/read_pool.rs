//! Round-robin pool of read-only connections.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;
use solace_core::errors::{SolaceResult, StorageError};

use crate::to_storage_err;

use super::pragmas;

/// Fixed-size pool of read connections, handed out round-robin.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    pub fn open(path: &Path, size: usize) -> SolaceResult<Self> {
        let size = size.max(1);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn =
                Connection::open(path).map_err(|e| to_storage_err(format!("open reader: {e}")))?;
            pragmas::apply_reader_pragmas(&conn)?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    pub fn open_in_memory(size: usize) -> SolaceResult<Self> {
        let size = size.max(1);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_in_memory()
                .map_err(|e| to_storage_err(format!("open in-memory reader: {e}")))?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Run a closure against the next read connection in rotation.
    pub fn with_conn<F, T>(&self, f: F) -> SolaceResult<T>
    where
        F: FnOnce(&Connection) -> SolaceResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|_| StorageError::ConnectionPoisoned)?;
        f(&guard)
    }
}
