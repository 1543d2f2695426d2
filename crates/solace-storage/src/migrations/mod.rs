//! Versioned schema migrations, tracked via `PRAGMA user_version`.

mod v001_conversation_tables;
mod v002_emotion_tables;
mod v003_chunk_tables;

use rusqlite::Connection;
use solace_core::errors::{SolaceResult, StorageError};

/// One migration step.
struct Migration {
    version: u32,
    apply: fn(&Connection) -> rusqlite::Result<()>,
}

const MIGRATIONS: [Migration; 3] = [
    Migration {
        version: 1,
        apply: v001_conversation_tables::apply,
    },
    Migration {
        version: 2,
        apply: v002_emotion_tables::apply,
    },
    Migration {
        version: 3,
        apply: v003_chunk_tables::apply,
    },
];

/// Run all pending migrations. Each step commits atomically and bumps
/// `user_version`, so a crash mid-sequence resumes at the next step.
pub fn run_migrations(conn: &Connection) -> SolaceResult<()> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: migration.version,
            reason: e.to_string(),
        };

        conn.execute_batch("BEGIN").map_err(failed)?;
        match (migration.apply)(conn) {
            Ok(()) => {
                conn.pragma_update(None, "user_version", migration.version)
                    .map_err(failed)?;
                conn.execute_batch("COMMIT").map_err(failed)?;
                tracing::debug!(version = migration.version, "applied migration");
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                return Err(failed(e).into());
            }
        }
    }

    Ok(())
}
