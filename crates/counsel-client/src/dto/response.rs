//! Response envelope helpers.
//!
//! Entity payloads deserialize straight into `counsel-entity` types;
//! the only extra shape the client needs is the error envelope the
//! backend wraps failures in.

use serde::Deserialize;

/// Error body the backend attaches to non-success responses.
///
/// Only the human-readable message is used; anything else in the body
/// is ignored.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiMessage {
    /// Server-provided failure description.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extraction() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"message": "Session is full", "status": 409}"#)
                .expect("deserialize");
        assert_eq!(body.message.as_deref(), Some("Session is full"));
    }

    #[test]
    fn test_message_absent() {
        let body: ApiMessage = serde_json::from_str("{}").expect("deserialize");
        assert!(body.message.is_none());
    }
}
