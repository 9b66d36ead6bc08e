//! Response Envelope
//!
//! Every response from the authentication endpoints is wrapped in an
//! [`ApiResponse`]. The JSON shape is fixed because the client and any
//! browser frontend parse it directly:
//!
//! ```json
//! {
//!   "responseStatus": "success",
//!   "responseMessage": "Login successful. Welcome back!",
//!   "responseObject": { "token": "...", "username": "alice", "email": "alice@example.com" }
//! }
//! ```
//!
//! A `failure` envelope never carries a payload: the only constructor for a
//! failure takes no object, and the payload is `None`.

use serde::{Deserialize, Serialize};

/// Outcome tag carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Failure,
    Warning,
}

/// Envelope wrapping a status tag, a human-readable message and an optional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub response_status: ResponseStatus,
    #[serde(default)]
    pub response_message: String,
    pub response_object: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, object: T) -> Self {
        Self {
            response_status: ResponseStatus::Success,
            response_message: message.into(),
            response_object: Some(object),
        }
    }

    pub fn warning(message: impl Into<String>, object: T) -> Self {
        Self {
            response_status: ResponseStatus::Warning,
            response_message: message.into(),
            response_object: Some(object),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            response_status: ResponseStatus::Failure,
            response_message: message.into(),
            response_object: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_status == ResponseStatus::Success
    }

    /// Message text, or `fallback` when the server sent an empty one.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.response_message.is_empty() {
            fallback
        } else {
            &self.response_message
        }
    }
}
