use std::path::Path;

use moodlog_core::util::format_date;

use crate::commands::common::{emotion_label, normalize_entry_id, open_store};
use crate::error::CliError;

pub async fn run_show(id: &str, cache_path: &Path) -> Result<(), CliError> {
    let target = normalize_entry_id(id)?;

    let store = open_store(cache_path).await;
    let entry = store
        .entry(&target)
        .ok_or_else(|| CliError::EntryNotFound(target.to_string()))?;

    println!("id:      {}", entry.id);
    println!("date:    {}", format_date(entry.date));
    println!("emotion: {}", emotion_label(entry.emotion_id));
    println!();
    println!("{}", entry.content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use moodlog_core::cache::{CacheStore, JsonFileCache};
    use moodlog_core::{Entry, EntryId};

    use super::*;

    #[tokio::test]
    async fn run_show_prints_existing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");
        JsonFileCache::new(&cache_path)
            .save(&[Entry {
                id: EntryId::from(4),
                date: 100,
                content: "an entry".to_string(),
                emotion_id: 3,
            }])
            .unwrap();

        run_show("4", &cache_path).await.unwrap();
    }

    #[tokio::test]
    async fn run_show_rejects_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        let error = run_show("99", &cache_path).await.unwrap_err();
        assert!(matches!(error, CliError::EntryNotFound(_)));
    }

    #[tokio::test]
    async fn run_show_rejects_blank_id() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        let error = run_show("  ", &cache_path).await.unwrap_err();
        assert!(matches!(error, CliError::EmptyEntryId));
    }
}
