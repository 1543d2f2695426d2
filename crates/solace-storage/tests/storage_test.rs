use solace_core::models::{
    DetectionMethod, DocumentChunk, EmotionLabel, EmotionReading, Intensity, Role,
};
use solace_core::traits::{IChunkStore, IEmotionStore, IMessageStore};
use solace_storage::StorageEngine;

fn reading(labels: Vec<EmotionLabel>) -> EmotionReading {
    EmotionReading {
        emotions: labels,
        intensity: Intensity::Medium,
        method: DetectionMethod::Keyword,
    }
}

// ── Conversation log ──────────────────────────────────────────────────────

#[test]
fn turns_round_trip_in_order_with_crisis_flag() {
    let store = StorageEngine::open_in_memory().unwrap();

    store.append("s1", Role::User, "first", false).unwrap();
    store.append("s1", Role::Model, "second", false).unwrap();
    store.append("s1", Role::User, "I feel awful", true).unwrap();

    let history = store.history("s1", 20).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].content, "first");
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Model);
    assert!(history[2].is_crisis);
}

#[test]
fn history_never_exceeds_window() {
    let store = StorageEngine::open_in_memory().unwrap();

    for i in 0..30 {
        store
            .append("s1", Role::User, &format!("turn {i}"), false)
            .unwrap();
    }

    let history = store.history("s1", 20).unwrap();
    assert_eq!(history.len(), 20);
    // The window keeps the most recent turns, oldest first.
    assert_eq!(history[0].content, "turn 10");
    assert_eq!(history[19].content, "turn 29");
}

#[test]
fn sessions_are_isolated() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.append("a", Role::User, "hello a", false).unwrap();
    store.append("b", Role::User, "hello b", false).unwrap();

    let history = store.history("a", 20).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].content, "hello a");
}

#[test]
fn crisis_flag_marks_the_session() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.append("calm", Role::User, "all good", false).unwrap();
    store.append("risky", Role::User, "bad day", true).unwrap();

    assert!(!store.session_has_crisis("calm").unwrap());
    assert!(store.session_has_crisis("risky").unwrap());
}

// ── Exchange transaction ──────────────────────────────────────────────────

#[test]
fn record_exchange_writes_both_turns_and_emotion() {
    let store = StorageEngine::open_in_memory().unwrap();

    store
        .record_exchange(
            "s1",
            "I feel anxious",
            "That sounds hard.",
            false,
            Some(&reading(vec![EmotionLabel::Anxious])),
        )
        .unwrap();

    let history = store.history("s1", 20).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Model);

    let emotions = store.recent_emotions("s1", 10).unwrap();
    assert_eq!(emotions.len(), 1);
    assert_eq!(emotions[0].emotions, vec![EmotionLabel::Anxious]);
    assert_eq!(emotions[0].message_snippet, "I feel anxious");
}

#[test]
fn crisis_exchange_skips_emotion_record() {
    let store = StorageEngine::open_in_memory().unwrap();

    store
        .record_exchange("s1", "crisis text", "emergency reply", true, None)
        .unwrap();

    let history = store.history("s1", 20).unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|t| t.is_crisis));
    assert!(store.recent_emotions("s1", 10).unwrap().is_empty());
}

// ── Emotion records ───────────────────────────────────────────────────────

#[test]
fn emotion_snippet_is_bounded_to_300_chars() {
    let store = StorageEngine::open_in_memory().unwrap();
    let long_message = "x".repeat(500);

    store
        .insert_emotion("s1", &long_message, &reading(vec![EmotionLabel::Stressed]))
        .unwrap();

    let records = store.recent_emotions("s1", 1).unwrap();
    assert_eq!(records[0].message_snippet.chars().count(), 300);
}

#[test]
fn recent_emotions_come_newest_first() {
    let store = StorageEngine::open_in_memory().unwrap();
    store
        .insert_emotion("s1", "one", &reading(vec![EmotionLabel::Sad]))
        .unwrap();
    store
        .insert_emotion("s1", "two", &reading(vec![EmotionLabel::Hopeful]))
        .unwrap();

    let records = store.recent_emotions("s1", 10).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message_snippet, "two");
    assert_eq!(records[1].message_snippet, "one");
}

// ── Chunk metadata ────────────────────────────────────────────────────────

fn chunk(vector_id: i64, book: &str) -> DocumentChunk {
    DocumentChunk {
        vector_id,
        book_name: book.to_string(),
        section: "Chapter 1".to_string(),
        topic: None,
        content: "Some psychology text.".to_string(),
        metadata: None,
    }
}

#[test]
fn chunks_fetch_by_vector_ids_skips_missing() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.insert_chunk(&chunk(0, "Feeling Good")).unwrap();
    store.insert_chunk(&chunk(1, "The Happiness Trap")).unwrap();

    let found = store.chunks_by_vector_ids(&[1, 99]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].book_name, "The Happiness Trap");

    assert_eq!(store.chunk_count().unwrap(), 2);
}

#[test]
fn empty_id_list_fetches_nothing() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert!(store.chunks_by_vector_ids(&[]).unwrap().is_empty());
}

// ── File-backed mode ──────────────────────────────────────────────────────

#[test]
fn file_backed_engine_reads_through_the_pool_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("solace.db");

    {
        let store = StorageEngine::open(&db_path).unwrap();
        store
            .record_exchange("s1", "hello", "hi there", false, Some(&reading(vec![EmotionLabel::Neutral])))
            .unwrap();
        // Reads route through the read pool in file-backed mode.
        assert_eq!(store.history("s1", 20).unwrap().len(), 2);
    }

    // Reopening re-runs migrations (a no-op) and sees the committed data.
    let store = StorageEngine::open(&db_path).unwrap();
    let history = store.history("s1", 20).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content, "hello");
    assert_eq!(store.recent_emotions("s1", 10).unwrap().len(), 1);
}
