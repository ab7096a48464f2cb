//! Data models for moodlog

mod entry;

pub use entry::{Emotion, Entry, EntryId};
