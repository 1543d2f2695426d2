//! Query modules, one per table family.

pub mod chunk_ops;
pub mod emotion_ops;
pub mod message_ops;

use chrono::{DateTime, Utc};

/// Current time in the stored text form (RFC 3339).
pub(crate) fn now_string() -> String {
    Utc::now().to_rfc3339()
}

/// Parse a stored timestamp. Corrupt rows fall back to the Unix epoch
/// rather than aborting a whole history load.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
