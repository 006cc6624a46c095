//! Backend response envelope

use serde::{Deserialize, Serialize};

/// Generic wrapper every backend payload arrives in.
///
/// Consumers read `data`; `error` and `message` carry backend-side
/// diagnostics that views may surface verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Consume the envelope, yielding the payload if one was sent.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Borrow the payload if one was sent.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates envelope decoding for the populated payload scenario.
    ///
    /// Assertions:
    /// - Ensures `parsed.success` evaluates to true.
    /// - Confirms `parsed.data` equals `Some(vec![1, 2, 3])`.
    #[test]
    fn decodes_populated_envelope() {
        let parsed: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3],"message":"ok"}"#).unwrap();

        assert!(parsed.success);
        assert_eq!(parsed.data, Some(vec![1, 2, 3]));
        assert_eq!(parsed.message.as_deref(), Some("ok"));
    }

    /// Validates envelope decoding for the error-without-data scenario.
    ///
    /// Assertions:
    /// - Ensures `parsed.data.is_none()` evaluates to true.
    /// - Confirms `parsed.error` carries the backend error string.
    #[test]
    fn decodes_error_envelope_without_data() {
        let parsed: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).unwrap();

        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error.as_deref(), Some("boom"));
    }
}
