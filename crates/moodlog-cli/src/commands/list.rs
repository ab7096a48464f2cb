use std::path::Path;

use moodlog_core::util::format_date;
use moodlog_core::Entry;
use serde::Serialize;

use crate::commands::common::{display_order, emotion_label, entry_preview, open_store, parse_month};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct EntryListItem {
    id: String,
    date: String,
    emotion: &'static str,
    content: String,
}

pub async fn run_list(month: Option<&str>, as_json: bool, cache_path: &Path) -> Result<(), CliError> {
    let store = open_store(cache_path).await;
    let mut entries = display_order(store.entries());

    if let Some(raw) = month {
        let (begin, end) = parse_month(raw)?;
        entries.retain(|it| begin <= it.date && it.date <= end);
    }

    if as_json {
        let items = entries.iter().map(to_list_item).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_entry_lines(&entries) {
            println!("{line}");
        }
    }

    Ok(())
}

fn to_list_item(entry: &Entry) -> EntryListItem {
    EntryListItem {
        id: entry.id.to_string(),
        date: format_date(entry.date),
        emotion: emotion_label(entry.emotion_id),
        content: entry.content.clone(),
    }
}

fn format_entry_lines(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let id = entry.id.to_string();
            let date = format_date(entry.date);
            let emotion = emotion_label(entry.emotion_id);
            let preview = entry_preview(entry, 40);
            format!("{id:<6}  {date}  {emotion:<9}  {preview}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use moodlog_core::cache::{CacheStore, JsonFileCache};
    use moodlog_core::EntryId;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: i64, date: i64, content: &str, emotion_id: u8) -> Entry {
        Entry {
            id: EntryId::from(id),
            date,
            content: content.to_string(),
            emotion_id,
        }
    }

    #[test]
    fn format_entry_lines_includes_id_date_and_emotion() {
        let lines = format_entry_lines(&[entry(3, 86_400_000, "a fine day", 1)]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("1970-01-02"));
        assert!(lines[0].contains("wonderful"));
        assert!(lines[0].contains("a fine day"));
    }

    #[test]
    fn to_list_item_renders_labels() {
        let item = to_list_item(&entry(1, 86_400_000, "hello", 5));
        assert_eq!(item.emotion, "awful");
        assert_eq!(item.date, "1970-01-02");
        assert_eq!(item.id, "1");
    }

    #[tokio::test]
    async fn run_list_succeeds_on_populated_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");
        JsonFileCache::new(&cache_path)
            .save(&[entry(1, 100, "hello", 2)])
            .unwrap();

        run_list(None, false, &cache_path).await.unwrap();
        run_list(Some("1970-01"), true, &cache_path).await.unwrap();
    }

    #[tokio::test]
    async fn run_list_rejects_malformed_month() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        let error = run_list(Some("spring"), false, &cache_path)
            .await
            .unwrap_err();
        assert!(matches!(error, CliError::InvalidMonth(_)));
    }
}
