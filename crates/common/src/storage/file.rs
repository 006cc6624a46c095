//! File-backed key-value store

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::KeyValueStore;

/// Key-value store persisted as a single JSON document on disk.
///
/// All keys live in one object, e.g.
/// `{"authToken":"…","user":{…},"theme":"dark"}`. Each operation is a
/// read-modify-write of the whole document, serialized by an internal lock.
/// An unreadable or unwritable path degrades to an empty store rather than
/// an error, so callers behave the same with or without persistence.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the JSON document at `path`.
    ///
    /// The file is created lazily on the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Map<String, Value> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Map::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "state document unreadable");
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                warn!(path = %self.path.display(), "state document is not an object; resetting");
                Map::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "state document corrupt; resetting");
                Map::new()
            }
        }
    }

    fn write_document(&self, document: &Map<String, Value>) {
        let raw = match serde_json::to_string_pretty(&Value::Object(document.clone())) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "state document unencodable");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %err, "state write dropped");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock();
        let document = self.read_document();
        document.get(key).map(std::string::ToString::to_string)
    }

    fn set_raw(&self, key: &str, value: &str) {
        let parsed: Value = match serde_json::from_str(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(key, error = %err, "refusing to store non-JSON value");
                return;
            }
        };

        let _guard = self.lock.lock();
        let mut document = self.read_document();
        document.insert(key.to_string(), parsed);
        self.write_document(&document);
        debug!(key, path = %self.path.display(), "state key written");
    }

    fn remove(&self, key: &str) {
        let _guard = self.lock.lock();
        let mut document = self.read_document();
        if document.remove(key).is_some() {
            self.write_document(&document);
            debug!(key, path = %self.path.display(), "state key removed");
        }
    }
}
