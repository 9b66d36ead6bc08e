
pub mod types;

pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, AuthErrorKind, BackendError, INVALID_CREDENTIALS_MESSAGE};
