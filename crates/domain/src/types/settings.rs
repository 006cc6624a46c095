//! User settings and theming types

use serde::{Deserialize, Serialize};

/// UI color scheme preference. Shared by the server-side settings record and
/// the locally persisted UI preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Per-channel notification toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub processing: bool,
    pub upload: bool,
}

/// Server-owned settings record, cached client-side for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub user_id: String,
    pub theme: Theme,
    pub notifications: NotificationSettings,
    pub default_caption: String,
    pub default_hashtags: Vec<String>,
}

/// Partial settings update sent to `PUT /user/settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hashtags: Option<Vec<String>>,
}
