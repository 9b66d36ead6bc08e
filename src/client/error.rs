/**
 * Client Error Types
 *
 * Everything that can go wrong between pressing submit and having a session
 * on disk. `Http` keeps the status and, when the server sent one, the parsed
 * failure envelope so the forms can show the server's own message.
 */

use thiserror::Error;

use crate::shared::{ApiResponse, ConfigError, TokenResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Request failed with status {status}")]
    Http {
        status: u16,
        body: Option<ApiResponse<TokenResponse>>,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Non-empty `responseMessage` from the error body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { body: Some(body), .. } if !body.response_message.is_empty() => {
                Some(body.response_message.as_str())
            }
            _ => None,
        }
    }
}
