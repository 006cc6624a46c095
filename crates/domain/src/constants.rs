//! Shared constants for the client data layer

/// Storage key holding the JSON-encoded bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// Storage key holding the JSON-encoded UI theme.
pub const THEME_KEY: &str = "theme";

/// Default backend base path when no configuration is provided.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
