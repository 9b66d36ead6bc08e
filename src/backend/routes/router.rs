/**
 * Router Configuration
 *
 * Combines the API routes, the health probe and the HTTP layers into a
 * single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (`/User/login`, `/User/register`)
 * 2. `GET /health`
 * 3. Fallback handler (404)
 */

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// CORS is permissive so the browser client can call the API from another
/// origin. Requests are traced at the `tower_http` target.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .route("/health", get(health))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "OK"
}
