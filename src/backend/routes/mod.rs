//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - `/User/login` and `/User/register`

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
