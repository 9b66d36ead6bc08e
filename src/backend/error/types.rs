/**
 * Backend Error Types
 *
 * - `AuthError` - the service-boundary error returned by login/register. It
 *   carries a structured `AuthErrorKind` that decides the HTTP status, and a
 *   display message that goes into the failure envelope. The status never
 *   depends on the message text.
 * - `BackendError` - startup errors for the server binary (configuration,
 *   database, migrations, socket binding).
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::ConfigError;

/// Message returned for both "no such user" and "wrong password".
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Category of an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Username or email is already registered
    Conflict,
    /// Unknown identifier or wrong password
    InvalidCredentials,
    /// Missing fields, malformed body, or a user policy violation
    Validation,
    /// Anything unexpected from the store, hasher or signer
    Internal,
}

impl AuthErrorKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Validation | Self::Internal => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Conflict, message)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(AuthErrorKind::InvalidCredentials, INVALID_CREDENTIALS_MESSAGE)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Validation, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Internal, message)
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AuthError::conflict("taken").status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::invalid_credentials().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::internal("boom").status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_ignores_message_text() {
        // A conflict-sounding message on a non-conflict kind stays 400
        let error = AuthError::internal("Registration failed: row already exists");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_message() {
        let error = AuthError::invalid_credentials();
        assert_eq!(error.to_string(), "Invalid email or password.");
        assert_eq!(error.kind, AuthErrorKind::InvalidCredentials);
    }

    #[test]
    fn test_backend_error_from_config() {
        let error: BackendError = ConfigError::MissingValue("JWT_SECRET").into();
        assert!(error.to_string().contains("JWT_SECRET"));
    }
}
