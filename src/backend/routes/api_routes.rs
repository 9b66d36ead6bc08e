/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /User/login` - Login by email or username
 * - `POST /User/register` - Create an account and log it in
 *
 * Both are public and answer with an `ApiResponse<TokenResponse>` envelope.
 */

use axum::routing::post;
use axum::Router;

use crate::backend::auth::{login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/User/login", post(login))
        .route("/User/register", post(register))
}
