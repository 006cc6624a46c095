//! Application context - dependency injection container

use std::sync::Arc;

use reelforge_client::api::{Api, ApiClient, ApiError, UnauthorizedObserver};
use reelforge_common::storage::{FileStore, KeyValueStore};
use reelforge_common::stores::{ReelsStore, SessionStore, UiStore};
use reelforge_domain::Config;
use tracing::info;

/// Unauthorized hook wired by the context: flips the session store to
/// anonymous so views observing it can decide about redirection. The data
/// layer itself never navigates.
struct SessionLogoutObserver {
    session: Arc<SessionStore>,
}

impl UnauthorizedObserver for SessionLogoutObserver {
    fn on_unauthorized(&self) {
        info!("unauthorized response: logging session out");
        self.session.logout();
    }
}

/// Application context - holds all services and dependencies
///
/// Created once at application bootstrap and handed to the view layer's
/// composition root. Store handles are shared `Arc`s; dropping the context
/// tears the data layer down with it.
pub struct AppContext {
    pub config: Config,
    pub storage: Arc<dyn KeyValueStore>,
    pub session: Arc<SessionStore>,
    pub reels: Arc<ReelsStore>,
    pub ui: Arc<UiStore>,
    pub api: Api,
}

impl AppContext {
    /// Build the context with file-backed persistence at the configured
    /// path.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the API client cannot be constructed.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.path));
        Self::with_storage(config, storage)
    }

    /// Build the context over an explicit storage adapter.
    ///
    /// Composition seam for tests and alternative persistence backends.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the API client cannot be constructed.
    pub fn with_storage(
        config: Config,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ApiError> {
        let session = Arc::new(SessionStore::new(Arc::clone(&storage)));
        let reels = Arc::new(ReelsStore::new());
        let ui = Arc::new(UiStore::new(Arc::clone(&storage)));

        let observer: Arc<dyn UnauthorizedObserver> =
            Arc::new(SessionLogoutObserver { session: Arc::clone(&session) });
        let client = ApiClient::new(&config.api, Arc::clone(&storage))?
            .with_unauthorized_observer(observer);
        let api = Api::new(Arc::new(client));

        Ok(Self { config, storage, session, reels, ui, api })
    }

    /// Hydrate persisted state into the stores. Call once at start.
    pub fn initialize(&self) {
        self.session.initialize();
        self.ui.initialize();
        info!(
            authenticated = self.session.is_authenticated(),
            base_url = %self.config.api.base_url,
            "app context initialized"
        );
    }
}
