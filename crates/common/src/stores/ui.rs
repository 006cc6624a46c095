//! UI preference store
//!
//! The theme survives a restart (mirrored to storage on every change); the
//! sidebar toggle is session-only.

use std::sync::Arc;

use parking_lot::RwLock;
use reelforge_domain::constants::THEME_KEY;
use reelforge_domain::types::Theme;
use tracing::debug;

use super::subscribers::{SubscriberSet, SubscriptionId};
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// Snapshot handed to subscribers and views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, theme: Theme::default() }
    }
}

/// Observable container for UI preferences.
pub struct UiStore {
    state: RwLock<UiState>,
    storage: Arc<dyn KeyValueStore>,
    subscribers: SubscriberSet<UiState>,
}

impl UiStore {
    /// Create a store with default preferences over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(UiState::default()),
            storage,
            subscribers: SubscriberSet::new(),
        }
    }

    /// Hydrate the persisted theme, if any. Called once at start.
    pub fn initialize(&self) {
        if let Some(theme) = self.storage.get::<Theme>(THEME_KEY) {
            debug!(?theme, "theme hydrated from storage");
            self.replace(|state| state.theme = theme);
        }
    }

    /// Flip the sidebar open/closed.
    pub fn toggle_sidebar(&self) {
        self.replace(|state| state.sidebar_open = !state.sidebar_open);
    }

    /// Change the theme, persisting it immediately.
    pub fn set_theme(&self, theme: Theme) {
        self.storage.set(THEME_KEY, &theme);
        self.replace(|state| state.theme = theme);
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        *self.state.read()
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.read().theme
    }

    /// Register a callback invoked synchronously after every change.
    pub fn subscribe(&self, callback: impl Fn(&UiState) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn replace(&self, mutate: impl FnOnce(&mut UiState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            *state
        };
        self.subscribers.notify(&snapshot);
    }
}
