//! Reel listing and publishing calls

use std::sync::Arc;

use reelforge_domain::types::{ApiResponse, PendingPublishCount, Reel, ReelStatus};
use serde::Serialize;

use super::client::ApiClient;
use super::errors::ApiError;

/// Query string of `GET /reels`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReelListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Plain pagination window.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `/reels` routes.
#[derive(Clone)]
pub struct ReelsApi {
    client: Arc<ApiClient>,
}

impl ReelsApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /reels`
    pub async fn list(&self, query: &ReelListQuery) -> Result<ApiResponse<Vec<Reel>>, ApiError> {
        self.client.get_with_query("/reels", query).await
    }

    /// `GET /reels/{id}/details`
    pub async fn get_details(&self, reel_id: &str) -> Result<ApiResponse<Reel>, ApiError> {
        self.client.get(&format!("/reels/{reel_id}/details")).await
    }

    /// `GET /reels/{videoId}`
    pub async fn get_by_video(
        &self,
        video_id: &str,
        page: &PageQuery,
    ) -> Result<ApiResponse<Vec<Reel>>, ApiError> {
        self.client.get_with_query(&format!("/reels/{video_id}"), page).await
    }

    /// `POST /reels/{id}/publish`
    pub async fn publish(&self, reel_id: &str) -> Result<ApiResponse<Reel>, ApiError> {
        self.client.post_empty(&format!("/reels/{reel_id}/publish")).await
    }

    /// `GET /reels/pending-publish/count`
    pub async fn pending_publish_count(
        &self,
    ) -> Result<ApiResponse<PendingPublishCount>, ApiError> {
        self.client.get("/reels/pending-publish/count").await
    }
}
