//! Authentication Handlers
//!
//! - **`login`** - `POST /User/login`
//! - **`register`** - `POST /User/register`
//!
//! Both return an `ApiResponse<TokenResponse>`: 200 for success or warning,
//! otherwise the status chosen by the error kind (409 for conflicts, 400 for
//! everything else).
//!
//! Request fields are checked for presence before the service runs; missing
//! fields produce a single 400 listing every missing field.

/// Login handler
pub mod login;

/// Registration handler
pub mod register;

pub use login::login;
pub use register::register;

use crate::backend::error::AuthError;
use crate::shared::validation::required_field_message;

/// Fail with `Validation error: ...` when any named field is missing or blank.
pub(crate) fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), AuthError> {
    let missing: Vec<String> = fields
        .iter()
        .filter_map(|(name, value)| required_field_message(name, *value))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::warn!("Rejected request with missing fields: {:?}", missing);
        Err(AuthError::validation(format!(
            "Validation error: {}",
            missing.join(", ")
        )))
    }
}
