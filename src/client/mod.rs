//! Client Module
//!
//! Native counterpart of the storefront web client: talks to the auth API,
//! validates the login and registration forms, and keeps the session on disk.
//!
//! # Architecture
//!
//! - **`config`** - API base URL and data directory
//! - **`storage`** - `SessionStore` trait with file and in-memory stores
//! - **`auth`** - `AuthClient`, the HTTP calls and the token side effect
//! - **`forms`** - `LoginForm` and `RegisterForm` with their message handling
//! - **`error`** - `ClientError`
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::client::{AuthClient, Config, FileStore, LoginForm};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let store = Arc::new(FileStore::open(config.session_path())?);
//! let client = AuthClient::new(config, store);
//!
//! let mut form = LoginForm::new("alice@example.com", "secret1");
//! form.submit(&client).await;
//! if form.state.redirect_after.is_some() {
//!     println!("logged in as {:?}", client.current_user());
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod storage;

pub use auth::{AuthClient, AuthResponse};
pub use config::Config;
pub use error::ClientError;
pub use forms::{FormState, LoginForm, RegisterForm, REDIRECT_DELAY};
pub use storage::{FileStore, MemoryStore, SessionStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};
