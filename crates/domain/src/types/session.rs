//! Client-side session model

use serde::{Deserialize, Serialize};

use super::user::User;

/// Client-side record of the authenticated user and their bearer token.
///
/// Modeled as a tagged value so that a user without a token (or a token
/// without a user) cannot be represented. Hydration from persistent storage
/// therefore requires both halves; partial persisted state is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Session {
    /// No user is signed in.
    #[default]
    Anonymous,
    /// A user is signed in with a valid-looking bearer token.
    Authenticated { user: User, token: String },
}

impl Session {
    /// Whether a user is currently signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous => None,
        }
    }

    /// The bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token.as_str()),
            Self::Anonymous => None,
        }
    }
}

/// Token payload returned by the legacy credential-auth endpoints.
///
/// Field names follow the backend schema (snake_case inside the envelope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            avatar: None,
        }
    }

    /// Validates `Session` accessors for the authenticated scenario.
    ///
    /// Assertions:
    /// - Ensures `session.is_authenticated()` evaluates to true.
    /// - Confirms `session.token()` equals `Some("tok")`.
    #[test]
    fn authenticated_session_exposes_user_and_token() {
        let session = Session::Authenticated { user: sample_user(), token: "tok".to_string() };

        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(session.token(), Some("tok"));
    }

    /// Validates `Session::default` behavior for the anonymous scenario.
    ///
    /// Assertions:
    /// - Ensures `!session.is_authenticated()` evaluates to true.
    /// - Ensures `session.user().is_none()` evaluates to true.
    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }
}
