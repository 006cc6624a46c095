//! State survives a process restart: a second context over the same state
//! file sees what the first one persisted.

mod support;

use std::sync::Arc;

use reelforge_app::AppContext;
use reelforge_common::storage::{FileStore, KeyValueStore};
use reelforge_domain::types::Theme;
use support::{sample_user, test_config};

fn context_at(path: &std::path::Path) -> AppContext {
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(path));
    AppContext::with_storage(test_config("http://localhost:8000/api".to_string()), storage)
        .expect("failed to build app context")
}

#[test]
fn session_and_theme_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state_path = dir.path().join("state.json");

    let first = context_at(&state_path);
    first.session.authenticate(sample_user(), "tok-persist".to_string());
    first.ui.set_theme(Theme::Dark);
    drop(first);

    let second = context_at(&state_path);
    second.initialize();

    assert!(second.session.is_authenticated());
    assert_eq!(second.session.session().token(), Some("tok-persist"));
    assert_eq!(second.ui.theme(), Theme::Dark);
}

#[test]
fn logout_in_one_run_means_anonymous_in_the_next() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state_path = dir.path().join("state.json");

    let first = context_at(&state_path);
    first.session.authenticate(sample_user(), "tok".to_string());
    first.session.logout();
    drop(first);

    let second = context_at(&state_path);
    second.initialize();

    assert!(!second.session.is_authenticated());
}
