use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] moodlog_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No entry content provided")]
    EmptyContent,
    #[error("Entry ID cannot be empty")]
    EmptyEntryId,
    #[error("Unrecognized date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Unrecognized month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),
    #[error("Emotion must be on the 1-5 scale, got {0}")]
    InvalidEmotion(u8),
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
}
