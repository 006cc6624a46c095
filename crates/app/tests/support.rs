//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use reelforge_app::AppContext;
use reelforge_common::storage::{KeyValueStore, MemoryStore};
use reelforge_domain::types::User;
use reelforge_domain::{ApiConfig, Config, StorageConfig};
use wiremock::MockServer;

/// Configuration pointing at a mock backend, with in-test-friendly timeouts.
pub fn test_config(base_url: String) -> Config {
    Config {
        api: ApiConfig { base_url, timeout_seconds: 5 },
        storage: StorageConfig { path: "unused-in-tests.json".to_string() },
    }
}

/// Build a context over in-memory storage wired to the given mock server.
pub fn context_over(server: &MockServer) -> (AppContext, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let context =
        AppContext::with_storage(test_config(server.uri()), storage.clone() as Arc<dyn KeyValueStore>)
            .expect("failed to build app context");
    (context, storage)
}

pub fn sample_user() -> User {
    User {
        id: "u1".to_string(),
        email: "ada@example.com".to_string(),
        name: "Ada".to_string(),
        avatar: None,
    }
}
