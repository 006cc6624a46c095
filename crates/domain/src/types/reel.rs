//! Reel view models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publish lifecycle of a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReelStatus {
    Ready,
    Published,
    Failed,
}

/// Server-owned reel record derived from a source video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    pub id: String,
    pub video_id: String,
    pub title: String,
    pub duration: f64,
    pub thumbnail: String,
    pub video_url: String,
    pub status: ReelStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload of `GET /reels/pending-publish/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPublishCount {
    pub pending_count: u64,
}
