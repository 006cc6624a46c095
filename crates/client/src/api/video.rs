//! Video pipeline calls

use std::sync::Arc;

use reelforge_domain::types::{ApiResponse, ProcessingStatus, Video};
use serde::Serialize;

use super::client::ApiClient;
use super::errors::ApiError;

#[derive(Debug, Serialize)]
struct UploadYoutubeRequest<'a> {
    youtube_url: &'a str,
}

/// `/video` routes.
#[derive(Clone)]
pub struct VideoApi {
    client: Arc<ApiClient>,
}

impl VideoApi {
    pub(super) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /video/youtube`
    pub async fn upload_youtube(
        &self,
        youtube_url: &str,
    ) -> Result<ApiResponse<Video>, ApiError> {
        self.client.post("/video/youtube", &UploadYoutubeRequest { youtube_url }).await
    }

    /// `GET /video`
    pub async fn list(&self) -> Result<ApiResponse<Vec<Video>>, ApiError> {
        self.client.get("/video").await
    }

    /// `GET /video/{id}`
    pub async fn get(&self, video_id: &str) -> Result<ApiResponse<Video>, ApiError> {
        self.client.get(&format!("/video/{video_id}")).await
    }

    /// `POST /video/{id}/process`
    pub async fn process(
        &self,
        video_id: &str,
    ) -> Result<ApiResponse<ProcessingStatus>, ApiError> {
        self.client.post_empty(&format!("/video/{video_id}/process")).await
    }

    /// `GET /video/{id}/status`
    pub async fn status(
        &self,
        video_id: &str,
    ) -> Result<ApiResponse<ProcessingStatus>, ApiError> {
        self.client.get(&format!("/video/{video_id}/status")).await
    }
}
