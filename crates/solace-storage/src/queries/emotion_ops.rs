//! Emotion record queries.

use rusqlite::{params, Connection};

use solace_core::errors::SolaceResult;
use solace_core::models::{DetectionMethod, EmotionLabel, EmotionReading, EmotionRecord, Intensity};

use crate::to_storage_err;

use super::{now_string, parse_timestamp};

/// Serialize labels to the stored JSON array form, e.g. `["anxious","sad"]`.
fn labels_to_json(labels: &[EmotionLabel]) -> String {
    let names: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[\"neutral\"]".to_string())
}

/// Parse the stored JSON array, dropping anything outside the vocabulary.
/// An empty or corrupt array floors to `[Neutral]` so readings stay
/// non-empty.
fn labels_from_json(raw: &str) -> Vec<EmotionLabel> {
    let names: Vec<String> = serde_json::from_str(raw).unwrap_or_default();
    let labels: Vec<EmotionLabel> = names
        .iter()
        .filter_map(|n| EmotionLabel::parse(n))
        .collect();
    if labels.is_empty() {
        vec![EmotionLabel::Neutral]
    } else {
        labels
    }
}

pub fn insert_emotion(
    conn: &Connection,
    session_id: &str,
    snippet: &str,
    reading: &EmotionReading,
) -> SolaceResult<()> {
    conn.execute(
        "INSERT INTO emotion_records
            (session_id, message_snippet, emotions, intensity, detection_method, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            session_id,
            snippet,
            labels_to_json(&reading.emotions),
            reading.intensity.as_str(),
            reading.method.as_str(),
            now_string(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Most recent records for a session, newest first.
pub fn recent_for_session(
    conn: &Connection,
    session_id: &str,
    limit: usize,
) -> SolaceResult<Vec<EmotionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, session_id, message_snippet, emotions, intensity,
                    detection_method, created_at
             FROM emotion_records
             WHERE session_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![session_id, limit as i64], |row| {
            let emotions: String = row.get(3)?;
            let intensity: String = row.get(4)?;
            let method: String = row.get(5)?;
            let created_at: String = row.get(6)?;
            Ok(EmotionRecord {
                id: row.get(0)?,
                session_id: row.get(1)?,
                message_snippet: row.get(2)?,
                emotions: labels_from_json(&emotions),
                intensity: Intensity::parse_or_default(&intensity),
                detection_method: DetectionMethod::parse(&method),
                created_at: parse_timestamp(&created_at),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_label_json_floors_to_neutral() {
        assert_eq!(labels_from_json("not json"), vec![EmotionLabel::Neutral]);
        assert_eq!(labels_from_json("[]"), vec![EmotionLabel::Neutral]);
        assert_eq!(
            labels_from_json(r#"["ecstatic"]"#),
            vec![EmotionLabel::Neutral]
        );
    }

    #[test]
    fn labels_round_trip() {
        let labels = vec![EmotionLabel::Anxious, EmotionLabel::Stressed];
        assert_eq!(labels_from_json(&labels_to_json(&labels)), labels);
    }
}
