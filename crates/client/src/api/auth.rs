//! Legacy credential auth calls
//!
//! Retained for compatibility with the older auth scheme; newer deployments
//! authenticate through the social endpoints.

use std::sync::Arc;

use reelforge_domain::types::{ApiResponse, AuthTokens, User};
use serde::Serialize;

use super::client::ApiClient;
use super::errors::ApiError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// `POST /auth/*` and `GET /auth/me`.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<AuthTokens>, ApiError> {
        self.client.post("/auth/login", &LoginRequest { email, password }).await
    }

    /// `POST /auth/signup`
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client.post("/auth/signup", &SignupRequest { name, email, password }).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<ApiResponse<()>, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    /// `GET /auth/me`
    pub async fn get_me(&self) -> Result<ApiResponse<User>, ApiError> {
        self.client.get("/auth/me").await
    }
}
