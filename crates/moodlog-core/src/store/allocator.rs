//! Session-scoped identifier allocator for locally-minted entry ids.

use crate::models::Entry;

/// Monotonic counter for local-only entry ids.
///
/// Owned by the coordinator; one per session. The counter never goes
/// backwards, so ids stay unique even when both hydration sources raise it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: i64,
}

impl IdAllocator {
    /// New allocator starting at 0
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Raise the counter to `max(numeric ids) + 1`, never lowering it
    pub fn observe(&mut self, entries: &[Entry]) {
        if let Some(max) = entries.iter().filter_map(|it| it.id.as_number()).max() {
            self.next = self.next.max(max + 1);
        }
    }

    /// Return the current value and increment
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
