/**
 * Error Conversion
 *
 * `AuthError` implements `IntoResponse` so handlers can return it directly.
 * The body is always a failure envelope:
 *
 * ```json
 * {
 *   "responseStatus": "failure",
 *   "responseMessage": "Invalid email or password.",
 *   "responseObject": null
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::AuthError;
use crate::shared::{ApiResponse, TokenResponse};

impl AuthError {
    pub fn into_envelope(self) -> ApiResponse<TokenResponse> {
        ApiResponse::failure(self.message)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_envelope())).into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::validation(format!("Validation error: {}", rejection.body_text()))
    }
}
