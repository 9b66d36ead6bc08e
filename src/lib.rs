//! Storefront - Authentication Library
//!
//! Account registration and login for an online store: an Axum API that
//! issues signed bearer tokens, and a native client that drives the login and
//! registration forms and keeps the session between runs.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - `ApiResponse` envelope, login/register DTOs, `TokenResponse`
//!   - Field validation rules
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - `POST /User/login` and `POST /User/register`
//!   - SQLite user store, bcrypt hashing, HS256 tokens
//!
//! - **`client`** - Native client
//!   - HTTP auth client and session storage
//!   - Login and registration form models
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and the
//!   `storefront-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::validation::FieldError` values for client-side form validation
//! - `backend::error::AuthError` at the service boundary, rendered as a
//!   `failure` envelope
//! - `client::ClientError` for transport, HTTP and storage failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Native auth client
pub mod client;
