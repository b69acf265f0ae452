//! Error types for the employee API client.
//!
//! # Design
//! Every failure is a "request failed" to the user: the application layer
//! treats all variants the same way and shows one static message per
//! operation. The variants exist so the log line says what actually went
//! wrong. A 404 is not special-cased; it is just another non-2xx status.

use thiserror::Error;

/// Errors produced while building, executing, or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// The HTTP status, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
