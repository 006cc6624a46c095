//! Session store
//!
//! Holds the authenticated session and mirrors it to persistent storage so
//! it survives a restart:
//! - `authenticate` persists user and token together
//! - `logout` clears both together
//! - `initialize` hydrates from storage only when BOTH halves are present;
//!   partial persisted state is discarded and the session stays anonymous

use std::sync::Arc;

use parking_lot::RwLock;
use reelforge_domain::constants::{AUTH_TOKEN_KEY, USER_KEY};
use reelforge_domain::types::{Session, User};
use tracing::{debug, info, warn};

use super::subscribers::{SubscriberSet, SubscriptionId};
use crate::storage::{KeyValueStore, KeyValueStoreExt};

/// Snapshot handed to subscribers and views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Session,
    pub is_loading: bool,
}

/// Observable container for the client session.
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Arc<dyn KeyValueStore>,
    subscribers: SubscriberSet<SessionState>,
}

impl SessionStore {
    /// Create an anonymous store over the given storage adapter.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            storage,
            subscribers: SubscriberSet::new(),
        }
    }

    /// Hydrate the session from persistent storage.
    ///
    /// Called once at application start. Applies the persisted state only
    /// when both the user and the token are present; anything less leaves
    /// the store at its anonymous default.
    pub fn initialize(&self) {
        let user = self.storage.get::<User>(USER_KEY);
        let token = self.storage.get::<String>(AUTH_TOKEN_KEY);

        match (user, token) {
            (Some(user), Some(token)) => {
                info!(user_id = %user.id, "session hydrated from storage");
                self.replace(|state| {
                    state.session = Session::Authenticated { user, token };
                });
            }
            (None, None) => debug!("no persisted session"),
            _ => debug!("partial persisted session discarded"),
        }
    }

    /// Sign the session in, persisting both halves.
    pub fn authenticate(&self, user: User, token: String) {
        self.storage.set(USER_KEY, &user);
        self.storage.set(AUTH_TOKEN_KEY, &token);
        self.replace(|state| {
            state.session = Session::Authenticated { user, token };
        });
    }

    /// Replace the user inside an authenticated session.
    ///
    /// Ignored (with a warning) while anonymous: the session model has no
    /// representation for a user without a token.
    pub fn set_user(&self, user: User) {
        let authenticated = self.state.read().session.is_authenticated();
        if !authenticated {
            warn!("set_user ignored: session is anonymous");
            return;
        }

        self.storage.set(USER_KEY, &user);
        self.replace(|state| {
            if let Session::Authenticated { user: current, .. } = &mut state.session {
                *current = user;
            }
        });
    }

    /// Sign the session out, clearing both persisted halves.
    pub fn logout(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(AUTH_TOKEN_KEY);
        self.replace(|state| {
            state.session = Session::Anonymous;
            state.is_loading = false;
        });
    }

    /// Flip the loading flag views render a spinner from.
    pub fn set_loading(&self, is_loading: bool) {
        self.replace(|state| state.is_loading = is_loading);
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Current session value.
    #[must_use]
    pub fn session(&self) -> Session {
        self.state.read().session.clone()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_authenticated()
    }

    /// Register a callback invoked synchronously after every change.
    pub fn subscribe(&self, callback: impl Fn(&SessionState) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn replace(&self, mutate: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            state.clone()
        };
        self.subscribers.notify(&snapshot);
    }
}
