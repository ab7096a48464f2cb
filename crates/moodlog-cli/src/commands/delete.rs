use std::path::Path;

use crate::commands::common::{normalize_entry_id, open_store};
use crate::error::CliError;

pub async fn run_delete(id: &str, cache_path: &Path) -> Result<(), CliError> {
    let target = normalize_entry_id(id)?;

    let mut store = open_store(cache_path).await;
    if store.entry(&target).is_none() {
        return Err(CliError::EntryNotFound(target.to_string()));
    }

    store.delete_entry(target.clone());
    store.settle().await;

    println!("{target}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use moodlog_core::cache::{CacheStore, JsonFileCache};
    use moodlog_core::{Entry, EntryId};
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: i64, content: &str) -> Entry {
        Entry {
            id: EntryId::from(id),
            date: 100,
            content: content.to_string(),
            emotion_id: 2,
        }
    }

    #[tokio::test]
    async fn run_delete_removes_entry_from_local_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");
        JsonFileCache::new(&cache_path)
            .save(&[entry(2, "keep me"), entry(1, "delete me")])
            .unwrap();

        run_delete("1", &cache_path).await.unwrap();

        let entries = JsonFileCache::new(&cache_path).load().unwrap().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, EntryId::from(2));
    }

    #[tokio::test]
    async fn run_delete_rejects_missing_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache_path = dir.path().join("diary.json");

        let error = run_delete("42", &cache_path).await.unwrap_err();
        assert!(matches!(error, CliError::EntryNotFound(_)));
    }
}
