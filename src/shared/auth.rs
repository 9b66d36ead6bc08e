/**
 * Authentication Wire Types
 *
 * Request and response bodies for `POST /User/login` and `POST /User/register`.
 * These types are shared by the backend handlers and the native client so both
 * sides agree on field names.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// `email` holds either an email address or a username; the service tries the
/// username first. `username` is accepted as an alias on the wire.
///
/// Fields are optional on deserialization so that a missing field is reported
/// as a validation error instead of a JSON rejection.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    #[serde(default, alias = "username")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Registration request
///
/// Password confirmation is a client-side concern and is not part of this
/// type; an incoming `confirmPassword` field is ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_name: Some(user_name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Token payload returned inside a successful envelope.
///
/// `token` defaults to empty when absent so the client can detect a
/// malformed success response rather than failing to parse it.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TokenResponse {
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}
