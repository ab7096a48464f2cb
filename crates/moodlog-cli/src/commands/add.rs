use std::path::Path;

use chrono::Utc;

use crate::commands::common::{open_store, parse_entry_date, require_emotion, resolve_entry_content};
use crate::error::CliError;

pub async fn run_add(
    date: Option<&str>,
    emotion: u8,
    content_parts: &[String],
    cache_path: &Path,
) -> Result<(), CliError> {
    let emotion = require_emotion(emotion)?;
    let date_ms = match date {
        Some(raw) => parse_entry_date(raw)?,
        None => Utc::now().timestamp_millis(),
    };
    let content = resolve_entry_content(content_parts)?;

    let mut store = open_store(cache_path).await;
    let id = store.create_entry(date_ms, content, emotion.id());
    store.settle().await;

    println!("{id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use moodlog_core::cache::{CacheStore, JsonFileCache};
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn run_add_records_entry_in_local_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        run_add(
            Some("2024-05-01"),
            2,
            &["a".to_string(), "good".to_string(), "day".to_string()],
            &cache_path,
        )
        .await
        .unwrap();

        let entries = JsonFileCache::new(&cache_path).load().unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "a good day");
        assert_eq!(entries[0].emotion_id, 2);
    }

    #[tokio::test]
    async fn run_add_mints_sequential_ids_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        run_add(Some("2024-05-01"), 1, &["one".to_string()], &cache_path)
            .await
            .unwrap();
        run_add(Some("2024-05-02"), 2, &["two".to_string()], &cache_path)
            .await
            .unwrap();

        let entries = JsonFileCache::new(&cache_path).load().unwrap().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_str(), "1");
        assert_eq!(entries[1].id.as_str(), "0");
    }

    #[tokio::test]
    async fn run_add_rejects_out_of_scale_emotion() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        let error = run_add(None, 7, &["x".to_string()], &cache_path)
            .await
            .unwrap_err();
        assert!(matches!(error, CliError::InvalidEmotion(7)));
    }
}
