//! # solace-storage
//!
//! SQLite persistence for the Solace engine: the append-only conversation
//! log, emotion records, and the read-only document-chunk metadata table.
//! Single write connection + small read pool, versioned migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use solace_core::errors::StorageError;
use solace_core::SolaceError;

/// Map any sqlite-level failure into the storage error domain.
pub(crate) fn to_storage_err(message: impl Into<String>) -> SolaceError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
