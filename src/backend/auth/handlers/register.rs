/**
 * Registration Handler
 *
 * `POST /User/register`
 *
 * ```http
 * POST /User/register HTTP/1.1
 * Content-Type: application/json
 *
 * { "userName": "alice", "email": "alice@example.com", "password": "secret1" }
 * ```
 *
 * On success the new user is logged in and the response is identical to a
 * login response. An existing email or username returns 409.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::require_fields;
use crate::backend::auth::service::{AuthenticationService, NewAccount};
use crate::backend::error::AuthError;
use crate::shared::{ApiResponse, RegisterRequest, TokenResponse};

pub async fn register(
    State(service): State<Arc<AuthenticationService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TokenResponse>>, AuthError> {
    let Json(request) = payload?;
    let account = into_account(request)?;
    tracing::info!("Register request for username: {}, email: {}", account.username, account.email);

    let response = service.register(&account).await?;
    Ok(Json(response))
}

fn into_account(request: RegisterRequest) -> Result<NewAccount, AuthError> {
    require_fields(&[
        ("UserName", request.user_name.as_deref()),
        ("Email", request.email.as_deref()),
        ("Password", request.password.as_deref()),
    ])?;

    Ok(NewAccount {
        username: request.user_name.unwrap_or_default().trim().to_string(),
        email: request.email.unwrap_or_default().trim().to_string(),
        password: request.password.unwrap_or_default(),
    })
}
