//! Source video view models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a source video and of a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Processing,
    Completed,
    Failed,
}

/// Alias used where the status describes a processing run rather than the
/// video record itself; the wire values are identical.
pub type ProcessingState = VideoStatus;

/// Server-owned video record; the client holds read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub youtube_url: String,
    pub duration: f64,
    pub thumbnail: String,
    pub status: VideoStatus,
    pub reels_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Progress of a processing run. Transient: polled from the backend and
/// never persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatus {
    pub video_id: String,
    /// Completion percentage, 0-100.
    pub progress: f32,
    pub current_step: String,
    pub status: ProcessingState,
    /// Estimated seconds remaining.
    pub estimated_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates `VideoStatus` wire form for the lowercase serialization
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms serialized `VideoStatus::Completed` equals `"completed"`.
    /// - Confirms `"failed"` deserializes to `VideoStatus::Failed`.
    #[test]
    fn status_uses_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&VideoStatus::Completed).unwrap(), "\"completed\"");

        let parsed: VideoStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(parsed, VideoStatus::Failed);
    }

    /// Validates `Video` decoding for the camelCase payload scenario.
    ///
    /// Assertions:
    /// - Confirms `video.youtube_url` round-trips through `youtubeUrl`.
    /// - Confirms `video.reels_count` equals `3`.
    #[test]
    fn video_decodes_camel_case_payload() {
        let video: Video = serde_json::from_str(
            r#"{
                "id": "v1",
                "userId": "u1",
                "title": "Launch talk",
                "youtubeUrl": "https://youtu.be/abc123",
                "duration": 93.5,
                "thumbnail": "https://cdn.example.com/v1.jpg",
                "status": "completed",
                "reelsCount": 3,
                "createdAt": "2025-05-01T10:00:00Z",
                "updatedAt": "2025-05-01T10:05:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(video.youtube_url, "https://youtu.be/abc123");
        assert_eq!(video.reels_count, 3);
        assert_eq!(video.status, VideoStatus::Completed);
    }
}
