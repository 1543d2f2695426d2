//! Conversation log queries.

use rusqlite::{params, Connection};

use solace_core::errors::SolaceResult;
use solace_core::models::{Role, Turn};

use crate::to_storage_err;

use super::{now_string, parse_timestamp};

/// Append one turn. Timestamps are assigned here so both turns of an
/// exchange written in one transaction still order correctly via the
/// autoincrement id tiebreaker.
pub fn insert_message(
    conn: &Connection,
    session_id: &str,
    role: Role,
    content: &str,
    is_crisis: bool,
) -> SolaceResult<()> {
    conn.execute(
        "INSERT INTO conversation_messages (session_id, role, content, is_crisis, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![session_id, role.as_str(), content, is_crisis, now_string()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// The `window` most-recent turns for a session, oldest first.
///
/// Selects newest-first with a LIMIT, then reverses, so a long session
/// never returns more than the window.
pub fn history_window(conn: &Connection, session_id: &str, window: usize) -> SolaceResult<Vec<Turn>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, session_id, role, content, is_crisis, created_at
             FROM conversation_messages
             WHERE session_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![session_id, window as i64], |row| {
            let role: String = row.get(2)?;
            let created_at: String = row.get(5)?;
            Ok(Turn {
                id: row.get(0)?,
                session_id: row.get(1)?,
                role: Role::parse(&role),
                content: row.get(3)?,
                is_crisis: row.get(4)?,
                created_at: parse_timestamp(&created_at),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut turns = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    turns.reverse();
    Ok(turns)
}

/// Whether any turn in the session carries the crisis flag.
pub fn session_has_crisis(conn: &Connection, session_id: &str) -> SolaceResult<bool> {
    conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM conversation_messages
            WHERE session_id = ?1 AND is_crisis = 1
         )",
        params![session_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
