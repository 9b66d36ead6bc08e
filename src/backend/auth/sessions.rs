/**
 * Token Issuing
 *
 * Signs the HS256 bearer tokens returned by login and registration. Tokens
 * are stateless: nothing is stored server-side, and the expiry lives in the
 * signed payload.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Username
    pub name: String,
    /// Email
    pub email: String,
    /// Unique token id
    pub jti: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("Token lifetime out of range")]
    Lifetime,
}

/// Signing settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_hours: i64,
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    lifetime: Option<Duration>,
}

impl TokenIssuer {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding: DecodingKey::from_secret(settings.secret.as_bytes()),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            // None when out of range; `issue` then refuses to sign
            lifetime: Duration::try_hours(settings.expiry_hours),
        }
    }

    /// Create a token for `user` with a fresh `jti`
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires = self
            .lifetime
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(TokenError::Lifetime)?;
        let claims = Claims {
            name: user.username.clone(),
            email: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verify signature, expiry, issuer and audience, and return the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(TokenError::Invalid)?;
        Ok(data.claims)
    }
}
