//! Shared Module
//!
//! Types shared between the backend and the native client: the response
//! envelope, the authentication request/response bodies, field validation
//! rules, and configuration for reaching the API.
//!
//! Nothing in here depends on the `ssr` feature.

/// Response envelope wrapping every API reply
pub mod api_response;

/// Login/register request bodies and the token payload
pub mod auth;

/// Field validation rules
pub mod validation;

/// Application configuration
pub mod config;

pub use api_response::{ApiResponse, ResponseStatus};
pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
