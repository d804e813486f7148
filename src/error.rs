//! Error types for the LinkStash API client.
//!
//! Non-success HTTP responses are normalized into `ApiError::Api` carrying
//! a single human-readable message: the backend's JSON `"error"` field when
//! present, else the raw response text, else a synthesized status string.
//! Transport and decode failures keep their source errors attached.

use thiserror::Error;

use crate::session::StorageError;

/// Errors surfaced by `ApiClient` and the domain operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, offline).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not valid JSON for the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Persisting or clearing the session failed.
    #[error("session storage error: {0}")]
    Session(#[from] StorageError),
}

/// Normalize a non-success response body into a single message string.
///
/// Mirrors the backend's error convention: bodies are usually
/// `{"error": "..."}`. A JSON body without that key, or an empty body,
/// falls back to the status line; a non-JSON body is passed through raw.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let fallback = format!("HTTP error! status: {status}");
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("error")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_field_wins() {
        assert_eq!(error_message(400, r#"{"error":"bad input"}"#), "bad input");
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(error_message(500, ""), "HTTP error! status: 500");
    }

    #[test]
    fn non_json_body_passes_through_raw() {
        assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn json_without_error_key_falls_back_to_status() {
        assert_eq!(
            error_message(422, r#"{"detail":"nope"}"#),
            "HTTP error! status: 422"
        );
    }

    #[test]
    fn non_string_error_field_falls_back_to_status() {
        assert_eq!(
            error_message(400, r#"{"error":42}"#),
            "HTTP error! status: 400"
        );
    }
}
