//! Server Module
//!
//! Everything needed to turn configuration into a running `Router`.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and database loading
//! ├── state.rs  - Router state and `FromRef` extraction
//! └── init.rs   - Service wiring and app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{build_app, build_service, create_app};
pub use state::AppState;
