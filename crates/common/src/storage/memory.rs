//! In-memory key-value store

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use super::KeyValueStore;

/// Ephemeral store for tests and contexts without a writable filesystem.
///
/// `fail_all` simulates an unavailable backing store: reads return `None`
/// and writes are dropped, exactly as [`super::FileStore`] behaves when its
/// path is gone.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation behave as if the store were gone.
    pub fn fail_all(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    /// Undo [`Self::fail_all`].
    pub fn restore(&self) {
        self.unavailable.store(false, Ordering::SeqCst);
    }

    fn is_unavailable(&self) -> bool {
        self.unavailable.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        if self.is_unavailable() {
            debug!(key, "read against unavailable store");
            return None;
        }
        self.entries.lock().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) {
        if self.is_unavailable() {
            debug!(key, "write against unavailable store dropped");
            return;
        }
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        if self.is_unavailable() {
            return;
        }
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::super::KeyValueStoreExt;
    use super::*;

    /// Validates `MemoryStore` roundtrip for the set-then-get scenario.
    ///
    /// Assertions:
    /// - Confirms `store.get::<u32>("n")` equals `Some(7)`.
    #[test]
    fn roundtrips_values() {
        let store = MemoryStore::new();

        store.set("n", &7u32);

        assert_eq!(store.get::<u32>("n"), Some(7));
    }

    /// Validates `MemoryStore::fail_all` behavior for the unavailable store
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures reads return `None` while unavailable.
    /// - Ensures writes made while unavailable are dropped after `restore`.
    #[test]
    fn fail_all_drops_reads_and_writes() {
        let store = MemoryStore::new();
        store.set("n", &7u32);

        store.fail_all();
        assert!(store.get::<u32>("n").is_none());
        store.set("n", &8u32);

        store.restore();
        assert_eq!(store.get::<u32>("n"), Some(7));
    }

    /// Validates `MemoryStore::remove` behavior for the idempotent delete
    /// scenario.
    ///
    /// Assertion coverage: ensures the routine completes without panicking.
    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();

        store.remove("missing");
        store.set("n", &1u32);
        store.remove("n");
        store.remove("n");

        assert!(store.get::<u32>("n").is_none());
    }
}
