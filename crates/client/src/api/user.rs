//! Profile and settings calls

use std::sync::Arc;

use reelforge_domain::types::{
    ApiResponse, User, UserSettings, UserSettingsUpdate, UserUpdate,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// `/user` routes.
#[derive(Clone)]
pub struct UserApi {
    client: Arc<ApiClient>,
}

impl UserApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `PUT /user`
    pub async fn update(&self, update: &UserUpdate) -> Result<ApiResponse<User>, ApiError> {
        self.client.put("/user", update).await
    }

    /// `GET /user/settings`
    pub async fn get_settings(&self) -> Result<ApiResponse<UserSettings>, ApiError> {
        self.client.get("/user/settings").await
    }

    /// `PUT /user/settings`
    pub async fn update_settings(
        &self,
        update: &UserSettingsUpdate,
    ) -> Result<ApiResponse<UserSettings>, ApiError> {
        self.client.put("/user/settings", update).await
    }
}
