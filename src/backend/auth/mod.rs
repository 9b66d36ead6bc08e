//! Authentication Module
//!
//! User storage, password hashing, token issuing, and the login/register
//! flow behind `POST /User/login` and `POST /User/register`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and the SQLite user store
//! ├── policy.rs       - Username/email/password rules for new accounts
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - JWT issuing and verification
//! ├── service.rs      - Login and registration flow
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Shared field presence check
//!     ├── login.rs    - POST /User/login
//!     └── register.rs - POST /User/register
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs, 3 hours by default
//! - Unknown user and wrong password return the same message

/// User data model and database operations
pub mod users;

/// Account rules applied at registration
pub mod policy;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Login and registration flow
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use service::{AuthenticationService, Credentials, NewAccount};
pub use sessions::{Claims, JwtSettings, TokenIssuer};
pub use users::{SqliteUserStore, User, UserStore};
