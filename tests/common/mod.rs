//! Common test utilities and helpers
//!
//! - In-memory database fixtures
//! - Authentication test helpers (test server, seeded users)
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
#[cfg(feature = "ssr")]
pub mod auth_helpers;
#[cfg(feature = "ssr")]
pub mod database;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
