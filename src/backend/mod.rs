//! Backend Module
//!
//! Server-side code for the storefront authentication API: an Axum HTTP
//! server exposing login and registration over a SQLite user store, issuing
//! HS256 bearer tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database loading, application state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, tokens, the authentication service
//!   and its HTTP handlers
//! - **`error`** - Backend error types and their HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs     - Module exports and documentation
//! ├── main.rs    - Server binary
//! ├── server/    - Server initialization and state
//! ├── routes/    - Route configuration
//! ├── auth/      - Authentication
//! └── error/     - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<ApiResponse<TokenResponse>>, AuthError>`.
//! `AuthError` renders itself as a `failure` envelope, with the HTTP status
//! taken from its `AuthErrorKind`.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Re-export commonly used types
pub use auth::AuthenticationService;
pub use error::{AuthError, AuthErrorKind, BackendError};
pub use server::{create_app, ServerConfig};
