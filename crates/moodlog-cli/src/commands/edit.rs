use std::path::Path;

use crate::commands::common::{
    normalize_content, normalize_entry_id, open_store, parse_entry_date, require_emotion,
};
use crate::error::CliError;

pub async fn run_edit(
    id: &str,
    date: Option<&str>,
    emotion: Option<u8>,
    content: Option<&str>,
    cache_path: &Path,
) -> Result<(), CliError> {
    let target = normalize_entry_id(id)?;

    let mut store = open_store(cache_path).await;
    let existing = store
        .entry(&target)
        .cloned()
        .ok_or_else(|| CliError::EntryNotFound(target.to_string()))?;

    let date_ms = match date {
        Some(raw) => parse_entry_date(raw)?,
        None => existing.date,
    };
    let emotion_id = match emotion {
        Some(raw) => require_emotion(raw)?.id(),
        None => existing.emotion_id,
    };
    let content = match content {
        Some(raw) => normalize_content(raw).ok_or(CliError::EmptyContent)?,
        None => existing.content,
    };

    store.update_entry(target.clone(), date_ms, content, emotion_id);
    store.settle().await;

    println!("{target}");
    Ok(())
}
