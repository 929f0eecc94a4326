//! Client error model.
//!
//! Transport failures (connectivity, non-success status) and decode failures
//! are kept distinguishable so a caller can decide whether retrying a
//! non-idempotent stock mutation is safe. Nothing in this crate retries
//! automatically.

use thiserror::Error;

/// Result type used across the client.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of one remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The round trip never produced a status (connect, timeout, stream).
    #[error("network error: {0}")]
    Network(String),

    /// The remote side answered with a non-success status.
    #[error("api returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// A composite parameter could not be serialized.
    #[error("failed to encode parameter `{name}`")]
    Encode {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The response payload did not match the declared result shape.
    #[error("failed to decode response as {expected} (payload: `{fragment}`)")]
    Decode {
        expected: &'static str,
        fragment: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Transport-level failure: connectivity or HTTP status.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { .. })
    }

    /// Payload shape mismatch.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode { .. })
    }

    /// Status code, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
