//! Helpers shared by the CLI commands.

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::sync::Arc;

use moodlog_core::cache::JsonFileCache;
use moodlog_core::remote::{OfflineGateway, RemoteGateway, SupabaseGateway};
use moodlog_core::util::{month_range, parse_timestamp};
use moodlog_core::{DiaryStore, Emotion, Entry, EntryId};

use crate::config::remote_settings_from_env;
use crate::error::CliError;

/// Open and hydrate the diary store behind the configured cache slot.
///
/// Without remote settings in the environment the store runs local-only:
/// every mutation falls through to the local mirror.
pub async fn open_store(cache_path: &Path) -> DiaryStore<JsonFileCache> {
    let gateway: Arc<dyn RemoteGateway> = match remote_settings_from_env() {
        Some(settings) => match SupabaseGateway::new(&settings.url, &settings.anon_key) {
            Ok(gateway) => {
                tracing::info!("Remote mirror enabled: {}", settings.url);
                Arc::new(gateway)
            }
            Err(error) => {
                tracing::warn!("Invalid remote configuration, running local-only: {error}");
                Arc::new(OfflineGateway)
            }
        },
        None => {
            tracing::debug!("Running in local-only mode (no remote config)");
            Arc::new(OfflineGateway)
        }
    };

    let mut store = DiaryStore::new(JsonFileCache::new(cache_path), gateway);
    store.hydrate().await;
    store
}

/// Validate an emotion scale position
pub fn require_emotion(id: u8) -> Result<Emotion, CliError> {
    Emotion::from_id(id).ok_or(CliError::InvalidEmotion(id))
}

/// Parse a user-supplied entry date into epoch milliseconds
pub fn parse_entry_date(raw: &str) -> Result<i64, CliError> {
    parse_timestamp(raw).ok_or_else(|| CliError::InvalidDate(raw.trim().to_string()))
}

/// Parse `YYYY-MM` into the month's inclusive epoch-millisecond bounds
pub fn parse_month(raw: &str) -> Result<(i64, i64), CliError> {
    let trimmed = raw.trim();
    let invalid = || CliError::InvalidMonth(trimmed.to_string());

    let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    month_range(year, month).ok_or_else(invalid)
}

/// Normalize a user-supplied entry id
pub fn normalize_entry_id(raw: &str) -> Result<EntryId, CliError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyEntryId)
    } else {
        Ok(EntryId::from(trimmed))
    }
}

/// Resolve entry content from arguments, falling back to piped stdin
pub fn resolve_entry_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

/// Copy of the collection in display order: newest first by date, then id
pub fn display_order(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.id.as_number().cmp(&a.id.as_number()))
    });
    sorted
}

/// Label for an emotion scale position, tolerating out-of-scale values
pub fn emotion_label(emotion_id: u8) -> &'static str {
    Emotion::from_id(emotion_id).map_or("unknown", Emotion::label)
}

/// First line of the content, truncated to `max_chars` with an ellipsis
pub fn entry_preview(entry: &Entry, max_chars: usize) -> String {
    let first_line = entry.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: i64, date: i64, content: &str) -> Entry {
        Entry {
            id: EntryId::from(id),
            date,
            content: content.to_string(),
            emotion_id: 3,
        }
    }

    #[test]
    fn parse_month_accepts_year_month() {
        let (begin, end) = parse_month("1970-01").unwrap();
        assert_eq!(begin, 0);
        assert!(end > begin);
    }

    #[test]
    fn parse_month_rejects_malformed_input() {
        assert!(matches!(parse_month("1970"), Err(CliError::InvalidMonth(_))));
        assert!(matches!(
            parse_month("1970-13"),
            Err(CliError::InvalidMonth(_))
        ));
        assert!(matches!(
            parse_month("soon-ish"),
            Err(CliError::InvalidMonth(_))
        ));
    }

    #[test]
    fn parse_entry_date_accepts_bare_dates() {
        assert_eq!(parse_entry_date("1970-01-02").unwrap(), 86_400_000);
        assert!(matches!(
            parse_entry_date("tomorrow"),
            Err(CliError::InvalidDate(_))
        ));
    }

    #[test]
    fn require_emotion_enforces_the_scale() {
        assert!(require_emotion(1).is_ok());
        assert!(require_emotion(5).is_ok());
        assert!(matches!(require_emotion(0), Err(CliError::InvalidEmotion(0))));
        assert!(matches!(require_emotion(6), Err(CliError::InvalidEmotion(6))));
    }

    #[test]
    fn normalize_entry_id_rejects_empty() {
        assert!(matches!(
            normalize_entry_id(" \n "),
            Err(CliError::EmptyEntryId)
        ));
        assert_eq!(normalize_entry_id(" 12 ").unwrap(), EntryId::from(12));
    }

    #[test]
    fn resolve_entry_content_joins_arguments() {
        let parts = vec!["a".to_string(), "good".to_string(), "day".to_string()];
        assert_eq!(resolve_entry_content(&parts).unwrap(), "a good day");
    }

    #[test]
    fn display_order_sorts_by_date_then_id() {
        let entries = vec![entry(1, 100, "a"), entry(3, 300, "c"), entry(2, 300, "b")];
        let sorted = display_order(&entries);
        assert_eq!(
            sorted.iter().map(|it| it.id.as_str()).collect::<Vec<_>>(),
            vec!["3", "2", "1"]
        );
    }

    #[test]
    fn entry_preview_truncates_with_ellipsis() {
        let long = entry(1, 0, "This is a very long sentence that should be shortened");
        assert_eq!(entry_preview(&long, 20), "This is a very lo...");

        let multiline = entry(2, 0, "first line\nsecond line");
        assert_eq!(entry_preview(&multiline, 40), "first line");
    }

    #[test]
    fn emotion_label_tolerates_out_of_scale_values() {
        assert_eq!(emotion_label(1), "wonderful");
        assert_eq!(emotion_label(9), "unknown");
    }
}
