//! Typed API surface over the backend HTTP contract
//!
//! A fixed catalog of RPC-style calls grouped by resource. Each method is a
//! pure pass-through: exactly one HTTP call through [`ApiClient`], returning
//! the backend envelope unmodified. Callers interpret `data` and handle
//! errors beyond the global 401 policy themselves.

mod auth;
mod client;
mod errors;
mod instagram;
mod reels;
mod social;
mod user;
mod video;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

pub use auth::AuthApi;
pub use client::{ApiClient, UnauthorizedObserver};
pub use errors::{ApiError, ApiErrorCategory};
pub use instagram::InstagramApi;
pub use reels::{PageQuery, ReelListQuery, ReelsApi};
pub use social::SocialApi;
pub use user::UserApi;
pub use video::VideoApi;

/// Resource-grouped catalog of backend operations.
#[derive(Clone)]
pub struct Api {
    client: Arc<ApiClient>,
    auth: AuthApi,
    video: VideoApi,
    reels: ReelsApi,
    instagram: InstagramApi,
    social: SocialApi,
    user: UserApi,
}

impl Api {
    /// Build the catalog over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            auth: AuthApi::new(Arc::clone(&client)),
            video: VideoApi::new(Arc::clone(&client)),
            reels: ReelsApi::new(Arc::clone(&client)),
            instagram: InstagramApi::new(Arc::clone(&client)),
            social: SocialApi::new(Arc::clone(&client)),
            user: UserApi::new(Arc::clone(&client)),
            client,
        }
    }

    /// Derive a catalog whose calls are bound to `cancel`.
    ///
    /// A view creates one scope per lifetime; cancelling the token makes
    /// every in-flight and future call through the scoped catalog resolve to
    /// [`ApiError::Cancelled`] with no side effects.
    #[must_use]
    pub fn scoped(&self, cancel: CancellationToken) -> Self {
        Self::new(Arc::new(self.client.scoped(cancel)))
    }

    /// Legacy credential auth operations.
    #[must_use]
    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    /// Video pipeline operations.
    #[must_use]
    pub fn video(&self) -> &VideoApi {
        &self.video
    }

    /// Reel listing and publishing operations.
    #[must_use]
    pub fn reels(&self) -> &ReelsApi {
        &self.reels
    }

    /// Instagram account operations.
    #[must_use]
    pub fn instagram(&self) -> &InstagramApi {
        &self.instagram
    }

    /// Social account (Facebook/Instagram Graph) operations.
    #[must_use]
    pub fn social(&self) -> &SocialApi {
        &self.social
    }

    /// Profile and settings operations.
    #[must_use]
    pub fn user(&self) -> &UserApi {
        &self.user
    }
}
