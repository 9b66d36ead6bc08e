/**
 * Login Handler
 *
 * `POST /User/login`
 *
 * ```http
 * POST /User/login HTTP/1.1
 * Content-Type: application/json
 *
 * { "email": "alice@example.com", "password": "secret1" }
 * ```
 *
 * `email` may also hold a username, and `username` is accepted as the field
 * name. Wrong password and unknown user both return 400 with
 * `Invalid email or password.`
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::require_fields;
use crate::backend::auth::service::{AuthenticationService, Credentials};
use crate::backend::error::AuthError;
use crate::shared::{ApiResponse, LoginRequest, TokenResponse};

pub async fn login(
    State(service): State<Arc<AuthenticationService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TokenResponse>>, AuthError> {
    let Json(request) = payload?;
    let credentials = into_credentials(request)?;
    tracing::debug!("Login request for {}", credentials.identifier);

    let response = service.login(&credentials).await?;
    Ok(Json(response))
}

fn into_credentials(request: LoginRequest) -> Result<Credentials, AuthError> {
    require_fields(&[
        ("Email", request.email.as_deref()),
        ("Password", request.password.as_deref()),
    ])?;

    Ok(Credentials {
        identifier: request.email.unwrap_or_default().trim().to_string(),
        password: request.password.unwrap_or_default(),
    })
}
