#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failures surfaced by the API client.
///
/// `Clone` is required because refresh results are shared between
/// concurrent callers of the same single-flight operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response, carrying the server's message when one was
    /// parseable from the body.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response arrived but its body did not match the expected
    /// shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The credential is gone for good: refresh failed or was not
    /// possible, and the session has been terminated.
    #[error("session expired")]
    SessionExpired,
}

impl ApiError {
    /// Build the error for a non-2xx response. Prefers the `message`
    /// field of a JSON body, then `error`, then a generic fallback.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Status { status, message }
    }

    /// Whether this error is a cancelled request. Aborts happen on
    /// component teardown and must not be reported as failures.
    pub fn is_abort(&self) -> bool {
        matches!(self, ApiError::Network(message) if message.to_ascii_lowercase().contains("abort"))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
