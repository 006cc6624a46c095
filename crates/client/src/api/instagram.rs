//! Instagram account calls

use std::sync::Arc;

use reelforge_domain::types::{ApiResponse, DisconnectOutcome, InstagramPost, InstagramStatus};
use serde::Serialize;

use super::client::ApiClient;
use super::errors::ApiError;

#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    code: &'a str,
}

/// `/instagram` routes.
#[derive(Clone)]
pub struct InstagramApi {
    client: Arc<ApiClient>,
}

impl InstagramApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /instagram/connect`
    pub async fn connect(&self, code: &str) -> Result<ApiResponse<InstagramStatus>, ApiError> {
        self.client.post("/instagram/connect", &ConnectRequest { code }).await
    }

    /// `POST /instagram/disconnect`
    pub async fn disconnect(&self) -> Result<ApiResponse<DisconnectOutcome>, ApiError> {
        self.client.post_empty("/instagram/disconnect").await
    }

    /// `POST /instagram/upload/{reelId}`
    pub async fn upload(&self, reel_id: &str) -> Result<ApiResponse<InstagramPost>, ApiError> {
        self.client.post_empty(&format!("/instagram/upload/{reel_id}")).await
    }

    /// `GET /instagram/status`
    pub async fn get_status(&self) -> Result<ApiResponse<InstagramStatus>, ApiError> {
        self.client.get("/instagram/status").await
    }
}
