//! moodlog-core - Core library for moodlog
//!
//! This crate contains the shared models, local cache store, remote gateway,
//! and the state-synchronization coordinator used by all moodlog interfaces.

pub mod cache;
pub mod error;
pub mod models;
pub mod remote;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Emotion, Entry, EntryId};
pub use store::{Action, DiaryStore, IdAllocator};
