//! Persistent key-value storage with JSON-safe semantics
//!
//! The adapter contract is deliberately forgiving: reads return `None` on
//! missing keys, an unavailable backing store, or corrupt data; writes that
//! fail are logged and dropped; removes are no-ops when the store is gone.
//! Callers never see a storage error. The failure itself is always logged so
//! it stays diagnosable.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Object-safe persistent key-value contract over JSON-encoded values.
///
/// Every operation is an atomic single-key read or write; there is no
/// cross-key transactional guarantee.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw JSON text stored under `key`.
    ///
    /// Returns `None` when the key is absent or the store is unavailable.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Store raw JSON text under `key`. Failed writes are logged and dropped.
    fn set_raw(&self, key: &str, value: &str);

    /// Delete `key`. No-op when the key is absent or the store is
    /// unavailable.
    fn remove(&self, key: &str);
}

/// Typed helpers layered over the raw contract.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Fetch and decode the value stored under `key`.
    ///
    /// Corrupt values are logged and treated as absent.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding corrupt stored value");
                None
            }
        }
    }

    /// Encode and store `value` under `key`.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw(key, &raw),
            Err(err) => {
                warn!(key, error = %err, "dropping unencodable value");
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
