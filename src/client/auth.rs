/**
 * Authentication Client
 *
 * HTTP calls to `/User/login` and `/User/register`, plus the session side
 * effect: a `success` envelope carrying a non-empty token is written to the
 * session store as `authToken` (and `currentUser` when a username came back).
 * Any other `success` reply replaces the previous session with nothing, so a
 * token left over from an earlier login never stands in for this one.
 */

use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;

use crate::client::config::Config;
use crate::client::error::ClientError;
use crate::client::storage::{SessionStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};
use crate::shared::{ApiResponse, LoginRequest, RegisterRequest, TokenResponse};

pub type AuthResponse = ApiResponse<TokenResponse>;

/// The payload a response would open a session with, if any
pub fn session_payload(response: &AuthResponse) -> Option<&TokenResponse> {
    if !response.is_success() {
        return None;
    }
    response.response_object.as_ref().filter(|p| p.has_token())
}

#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    config: Config,
    store: Arc<dyn SessionStore>,
}

impl AuthClient {
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            config,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Login with an email (or username) and password
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response = self.post("/User/login", request).await?;
        self.handle_auth_response(&response)?;
        Ok(response)
    }

    /// Register a new account; a successful registration is also a login
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response = self.post("/User/register", request).await?;
        self.handle_auth_response(&response)?;
        Ok(response)
    }

    /// Forget the stored token and username
    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.store.remove(CURRENT_USER_KEY)?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn current_user(&self) -> Option<String> {
        self.store.get(CURRENT_USER_KEY)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthResponse, ClientError> {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!("POST {} returned {}", url, status);
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Returns whether this response opened a session
    fn handle_auth_response(&self, response: &AuthResponse) -> Result<bool, ClientError> {
        if !response.is_success() {
            return Ok(false);
        }
        let Some(payload) = session_payload(response) else {
            tracing::warn!("Success response carried no token; clearing stored session");
            self.store.remove(AUTH_TOKEN_KEY)?;
            self.store.remove(CURRENT_USER_KEY)?;
            return Ok(false);
        };

        self.store.set(AUTH_TOKEN_KEY, &payload.token)?;
        match &payload.username {
            Some(username) => self.store.set(CURRENT_USER_KEY, username)?,
            None => self.store.remove(CURRENT_USER_KEY)?,
        }
        Ok(true)
    }
}
