//! Social account (Facebook/Instagram Graph) calls

use std::sync::Arc;

use reelforge_domain::types::{
    ApiResponse, DisconnectOutcome, FacebookLoginUrl, RefreshTokenOutcome, SocialAccountStatus,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// `/social` routes.
#[derive(Clone)]
pub struct SocialApi {
    client: Arc<ApiClient>,
}

impl SocialApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /social/facebook/login`
    pub async fn facebook_login_url(&self) -> Result<ApiResponse<FacebookLoginUrl>, ApiError> {
        self.client.post_empty("/social/facebook/login").await
    }

    /// `GET /social/status`
    pub async fn status(&self) -> Result<ApiResponse<SocialAccountStatus>, ApiError> {
        self.client.get("/social/status").await
    }

    /// `POST /social/refresh-token`
    pub async fn refresh_token(&self) -> Result<ApiResponse<RefreshTokenOutcome>, ApiError> {
        self.client.post_empty("/social/refresh-token").await
    }

    /// `DELETE /social/disconnect`
    pub async fn disconnect(&self) -> Result<ApiResponse<DisconnectOutcome>, ApiError> {
        self.client.delete("/social/disconnect").await
    }

    /// `GET /social/check`
    pub async fn check_connection(&self) -> Result<ApiResponse<SocialAccountStatus>, ApiError> {
        self.client.get("/social/check").await
    }
}
