//! Social account connection payloads
//!
//! These mirror the backend's social/instagram schemas and keep their
//! snake_case field names inside the envelope's `data`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload of `POST /social/facebook/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookLoginUrl {
    /// Facebook OAuth login URL to open in a browser.
    pub login_url: String,
    /// State parameter echoed back on the OAuth callback.
    pub state: String,
}

/// Payload of `GET /social/status` and `GET /social/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccountStatus {
    pub is_connected: bool,
    pub connection_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_page_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires_at: Option<DateTime<Utc>>,
    pub is_token_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

/// Payload of `POST /social/refresh-token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenOutcome {
    pub token_refreshed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_expires_at: Option<DateTime<Utc>>,
}

/// Payload of the social/instagram disconnect endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisconnectOutcome {
    pub disconnected: bool,
}

/// Payload of the Instagram connection endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramStatus {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Payload of `POST /instagram/upload/{reelId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
}
