//! Database test fixtures
//!
//! Every fixture is a fresh in-memory SQLite database with migrations
//! applied, so tests are isolated without any cleanup step.

use sqlx::SqlitePool;
use storefront::backend::server::config::connect_in_memory;

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create in-memory test database");
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of stored users
    pub async fn user_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users");
        count
    }
}
