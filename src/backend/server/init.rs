/**
 * Server Initialization
 *
 * Wires the persistence layer, password hasher and token issuer into an
 * `AuthenticationService`, then hands it to the router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and apply migrations
 * 2. Build the authentication service from the loaded configuration
 * 3. Create the router with all routes and layers
 */

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AuthenticationService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::SqliteUserStore;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Fails when the database cannot be opened or migrated; the server does not
/// start without its user store.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing storefront backend server");

    let pool = load_database(&config.database_url).await?;
    let service = build_service(config, pool);

    tracing::info!(
        issuer = %config.jwt.issuer,
        audience = %config.jwt.audience,
        expiry_hours = config.jwt.expiry_hours,
        "Authentication service configured"
    );

    Ok(build_app(service))
}

/// Authentication service backed by `pool`
pub fn build_service(config: &ServerConfig, pool: SqlitePool) -> AuthenticationService {
    AuthenticationService::new(
        Arc::new(SqliteUserStore::new(pool)),
        TokenIssuer::new(&config.jwt),
        PasswordHasher::new(config.bcrypt_cost),
    )
}

pub fn build_app(service: AuthenticationService) -> Router<()> {
    create_router(AppState::new(service))
}
