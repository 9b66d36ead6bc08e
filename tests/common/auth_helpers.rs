//! Authentication test helpers
//!
//! Builds the real router over an in-memory database, with a fixed signing
//! key and the cheapest bcrypt cost.

use axum_test::TestServer;
use serde_json::json;
use storefront::backend::auth::sessions::{JwtSettings, TokenIssuer};
use storefront::backend::server::config::ServerConfig;
use storefront::backend::server::init::{build_app, build_service};

use super::database::TestDatabase;

pub const TEST_PASSWORD: &str = "secret123";

pub fn test_jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: "integration-test-secret".to_string(),
        issuer: "storefront-api".to_string(),
        audience: "storefront-ui".to_string(),
        expiry_hours: 3,
    }
}

pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::from_lookup(|name| match name {
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .expect("Failed to build test config");
    config.jwt = test_jwt_settings();
    config
}

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(&test_jwt_settings())
}

/// Test server plus the database behind it
pub async fn create_test_server() -> (TestServer, TestDatabase) {
    let db = TestDatabase::new().await;
    let service = build_service(&test_config(), db.pool().clone());
    let server = TestServer::new(build_app(service)).expect("Failed to start test server");
    (server, db)
}

/// Register `username` / `email` with [`TEST_PASSWORD`] through the API
pub async fn register_user(server: &TestServer, username: &str, email: &str) -> serde_json::Value {
    server
        .post("/User/register")
        .json(&json!({
            "userName": username,
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await
        .json()
}
