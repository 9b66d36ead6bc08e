/**
 * Application State Management
 *
 * `AppState` is the router state. Handlers extract only the part they need
 * through the `FromRef` implementations below, following Axum's recommended
 * pattern for state management.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::AuthenticationService;

#[derive(Clone)]
pub struct AppState {
    /// Login and registration, shared by every request
    pub auth: Arc<AuthenticationService>,
}

impl AppState {
    pub fn new(auth: AuthenticationService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// Lets the auth handlers take `State<Arc<AuthenticationService>>`
impl FromRef<AppState> for Arc<AuthenticationService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
