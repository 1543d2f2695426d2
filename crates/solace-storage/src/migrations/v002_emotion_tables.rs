//! v002: emotion records for mood trend tracking.

use rusqlite::Connection;

pub fn apply(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE emotion_records (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id        TEXT NOT NULL,
            message_snippet   TEXT NOT NULL,
            emotions          TEXT NOT NULL,
            intensity         TEXT NOT NULL DEFAULT 'medium',
            detection_method  TEXT NOT NULL,
            created_at        TEXT NOT NULL
        );
        CREATE INDEX idx_emotions_session
            ON emotion_records(session_id, created_at);",
    )
}
