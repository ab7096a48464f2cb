//! Pure state-transition function for the entry collection.
//!
//! `reduce` performs no I/O; persisting the result to the cache slot is the
//! coordinator's job, keyed off [`Action::persists`].

use crate::models::{Entry, EntryId};

/// One state transition of the entry collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the collection wholesale (hydration source, never persisted)
    Init(Vec<Entry>),
    /// Prepend a new entry (newest-first insertion)
    Create(Entry),
    /// Replace the entry with the same id; ids compare as strings
    Update(Entry),
    /// Remove the entry with the given id
    Delete(EntryId),
}

impl Action {
    /// Whether applying this action mirrors the result to the cache slot
    #[must_use]
    pub fn persists(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Map (collection, action) to the next collection.
#[must_use]
pub fn reduce(entries: Vec<Entry>, action: Action) -> Vec<Entry> {
    match action {
        Action::Init(data) => data,
        Action::Create(entry) => {
            let mut next = Vec::with_capacity(entries.len() + 1);
            next.push(entry);
            next.extend(entries);
            next
        }
        Action::Update(entry) => entries
            .into_iter()
            .map(|it| if it.id == entry.id { entry.clone() } else { it })
            .collect(),
        Action::Delete(target_id) => entries
            .into_iter()
            .filter(|it| it.id != target_id)
            .collect(),
    }
}
