//! Reels store
//!
//! Holds the latest fetched reels, the single selection, and the processing
//! flag. Nothing here is persisted; the state is rebuilt from API responses
//! on each page visit.

use parking_lot::RwLock;
use reelforge_domain::types::Reel;

use super::subscribers::{SubscriberSet, SubscriptionId};

/// Snapshot handed to subscribers and views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReelsState {
    pub reels: Vec<Reel>,
    pub selected_reel: Option<Reel>,
    pub is_processing: bool,
}

/// Observable container for reel listings and processing state.
#[derive(Default)]
pub struct ReelsStore {
    state: RwLock<ReelsState>,
    subscribers: SubscriberSet<ReelsState>,
}

impl ReelsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwLock::new(ReelsState::default()), subscribers: SubscriberSet::new() }
    }

    /// Replace the whole listing.
    pub fn set_reels(&self, reels: Vec<Reel>) {
        self.replace(|state| state.reels = reels);
    }

    /// Append one reel, leaving the existing order untouched.
    pub fn add_reel(&self, reel: Reel) {
        self.replace(|state| state.reels.push(reel));
    }

    /// Change (or clear) the single selection.
    pub fn select_reel(&self, reel: Option<Reel>) {
        self.replace(|state| state.selected_reel = reel);
    }

    /// Flip the processing flag.
    pub fn set_processing(&self, is_processing: bool) {
        self.replace(|state| state.is_processing = is_processing);
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ReelsState {
        self.state.read().clone()
    }

    /// Current listing.
    #[must_use]
    pub fn reels(&self) -> Vec<Reel> {
        self.state.read().reels.clone()
    }

    /// Register a callback invoked synchronously after every change.
    pub fn subscribe(&self, callback: impl Fn(&ReelsState) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn replace(&self, mutate: impl FnOnce(&mut ReelsState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };
        self.subscribers.notify(&snapshot);
    }
}
