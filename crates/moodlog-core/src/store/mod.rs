//! Synchronization coordinator for the diary entry collection.
//!
//! [`DiaryStore`] is the exclusive owner of the in-memory collection; the
//! local cache slot and the remote table are derived mirrors. Remote calls
//! run as spawned tasks whose completions always deliver a [`SyncOutcome`]
//! into a single-consumer queue, drained on the store's own task. Outcomes
//! can arrive out of user-action order; stale corrections are tolerated.

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::Error;
use crate::models::{Entry, EntryId};
use crate::remote::{EntryFields, RemoteGateway};

mod allocator;
mod reducer;

pub use allocator::IdAllocator;
pub use reducer::{reduce, Action};

/// Remote mutation kind, for logging confirmed round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOp {
    Create,
    Update,
    Delete,
}

/// Completion of one remote mutation round-trip.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The remote write landed; local state is reconciled by the next refetch
    Confirmed(SyncOp),
    /// The remote write failed; patch the local mirror with the intended
    /// mutation instead
    Reconcile(Action),
}

/// Coordinator owning the entry collection, the id allocator, and both
/// mirrors.
pub struct DiaryStore<C: CacheStore> {
    entries: Vec<Entry>,
    allocator: IdAllocator,
    cache: C,
    gateway: Arc<dyn RemoteGateway>,
    outcome_tx: UnboundedSender<SyncOutcome>,
    outcome_rx: UnboundedReceiver<SyncOutcome>,
    in_flight: usize,
    hydrated: bool,
}

impl<C: CacheStore> DiaryStore<C> {
    /// Create an empty, un-hydrated store
    pub fn new(cache: C, gateway: Arc<dyn RemoteGateway>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            entries: Vec::new(),
            allocator: IdAllocator::new(),
            cache,
            gateway,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
            hydrated: false,
        }
    }

    /// Hydrate from the cache slot, then from the remote table.
    ///
    /// The cache read is synchronous and lands first; the remote fetch,
    /// completing later, supersedes it. Either source failing is absorbed:
    /// the store keeps whatever state the other source provided.
    pub async fn hydrate(&mut self) {
        match self.cache.load() {
            Ok(Some(mut cached)) => {
                newest_first_by_id(&mut cached);
                self.allocator.observe(&cached);
                self.apply(Action::Init(cached));
                self.hydrated = true;
            }
            Ok(None) => {
                self.hydrated = true;
            }
            Err(error) => warn!("failed to read local cache: {error}"),
        }

        match self.gateway.select_all().await {
            Ok(rows) => {
                let mut entries = Vec::with_capacity(rows.len());
                for row in rows {
                    match row.into_entry() {
                        Ok(entry) => entries.push(entry),
                        Err(error) => warn!("skipping malformed remote row: {error}"),
                    }
                }
                self.allocator.observe(&entries);
                self.apply(Action::Init(entries));
                self.hydrated = true;
            }
            Err(Error::RemoteUnconfigured) => {
                debug!("no remote configured; keeping cached state");
            }
            Err(error) => warn!("remote fetch failed; keeping cached state: {error}"),
        }
    }

    /// Whether at least one hydration source has landed
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Current ordered entry collection (read-only)
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up one entry by id
    #[must_use]
    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|it| &it.id == id)
    }

    /// Remote mutations still awaiting their outcome
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Record a new entry.
    ///
    /// Mints a local id (the allocator is incremented before any await, so
    /// overlapping creates never share an id) and issues the remote insert.
    /// Only when the insert fails is the entry applied to the local mirror;
    /// on success the remote row is picked up by the next full refetch.
    pub fn create_entry(&mut self, date: i64, content: impl Into<String>, emotion_id: u8) -> EntryId {
        let id = EntryId::from(self.allocator.next());
        let entry = Entry {
            id: id.clone(),
            date,
            content: content.into(),
            emotion_id,
        };

        let fields = EntryFields::new(entry.date, entry.content.clone(), entry.emotion_id);
        let gateway = Arc::clone(&self.gateway);
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = match gateway.insert(fields).await {
                Ok(row) => {
                    debug!("remote insert confirmed as row {}", row.id);
                    SyncOutcome::Confirmed(SyncOp::Create)
                }
                Err(error) => {
                    warn!("remote insert failed, patching local mirror: {error}");
                    SyncOutcome::Reconcile(Action::Create(entry))
                }
            };
            let _ = outcome_tx.send(outcome);
        });

        id
    }

    /// Rewrite an existing entry's fields.
    ///
    /// Issues the remote update filtered by id; on failure the intended
    /// values are applied to the local mirror so it reflects the user's edit.
    pub fn update_entry(
        &mut self,
        target_id: EntryId,
        date: i64,
        content: impl Into<String>,
        emotion_id: u8,
    ) {
        let entry = Entry {
            id: target_id.clone(),
            date,
            content: content.into(),
            emotion_id,
        };

        let fields = EntryFields::new(entry.date, entry.content.clone(), entry.emotion_id);
        let gateway = Arc::clone(&self.gateway);
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = match gateway.update(&target_id, fields).await {
                Ok(()) => SyncOutcome::Confirmed(SyncOp::Update),
                Err(error) => {
                    warn!("remote update failed, patching local mirror: {error}");
                    SyncOutcome::Reconcile(Action::Update(entry))
                }
            };
            let _ = outcome_tx.send(outcome);
        });
    }

    /// Remove an entry.
    ///
    /// Issues the remote delete filtered by id; on failure the entry is
    /// removed from the local mirror directly.
    pub fn delete_entry(&mut self, target_id: EntryId) {
        let gateway = Arc::clone(&self.gateway);
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = match gateway.delete(&target_id).await {
                Ok(()) => SyncOutcome::Confirmed(SyncOp::Delete),
                Err(error) => {
                    warn!("remote delete failed, patching local mirror: {error}");
                    SyncOutcome::Reconcile(Action::Delete(target_id))
                }
            };
            let _ = outcome_tx.send(outcome);
        });
    }

    /// Drain already-delivered outcomes without waiting
    pub fn process_pending(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.consume(outcome);
        }
    }

    /// Wait for every in-flight remote mutation to deliver its outcome
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.outcome_rx.recv().await {
                Some(outcome) => self.consume(outcome),
                None => break,
            }
        }
    }

    fn consume(&mut self, outcome: SyncOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match outcome {
            SyncOutcome::Confirmed(op) => debug!("remote {op:?} confirmed"),
            SyncOutcome::Reconcile(action) => {
                if let Action::Delete(target_id) = &action {
                    if self.entry(target_id).is_none() {
                        debug!("ignoring stale delete reconciliation for id {target_id}");
                        return;
                    }
                }
                self.apply(action);
            }
        }
    }

    fn apply(&mut self, action: Action) {
        let persists = action.persists();
        let current = mem::take(&mut self.entries);
        self.entries = reduce(current, action);

        if persists {
            if let Err(error) = self.cache.save(&self.entries) {
                warn!("failed to write local cache: {error}");
            }
        }
    }
}

/// Sort entries newest-first by id: numeric ids in descending order, any
/// non-numeric ids after them in reverse string order.
fn newest_first_by_id(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.id.as_number()
            .cmp(&a.id.as_number())
            .then_with(|| b.id.as_str().cmp(a.id.as_str()))
    });
}
