//! API-specific error types
//!
//! Provides error classification for API operations. There is no retry
//! machinery in this layer: classification exists so views can choose what
//! to render, not so the client can recover.

use std::time::Duration;

use thiserror::Error;

/// Coarse categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401) - session has been cleared
    Authentication,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except 401) and undecodable payloads
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Configuration errors and local cancellation
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. By the time the caller sees
    /// this, the persisted session has already been cleared.
    #[error("Unauthorized: session cleared")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized => ApiErrorCategory::Authentication,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } | Self::Decode(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) | Self::Cancelled => ApiErrorCategory::Config,
        }
    }
}
