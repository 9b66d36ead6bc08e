/**
 * Authentication Service
 *
 * Login and registration against a `UserStore`.
 *
 * # Login
 *
 * 1. Look up the user by username, then by email
 * 2. Verify the password with bcrypt
 * 3. Sign a token with name, email and a fresh jti
 *
 * An unknown identifier and a wrong password produce the same error, so the
 * response does not reveal which accounts exist.
 *
 * # Registration
 *
 * 1. Reject an existing email, then an existing username (409)
 * 2. Apply the user policy (400)
 * 3. Hash the password and insert; a uniqueness violation from the store is
 *    reported the same way as step 1
 * 4. Log the new user in with the same credentials and return that result
 *
 * Unexpected failures never escape: they become `AuthErrorKind::Internal`
 * errors whose message names the failed operation.
 */

use std::sync::Arc;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::policy::UserPolicy;
use crate::backend::auth::sessions::{TokenError, TokenIssuer};
use crate::backend::auth::users::{NewUser, StoreError, UniqueField, User, UserStore};
use crate::backend::error::AuthError;
use crate::shared::{ApiResponse, TokenResponse};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful. Welcome back!";

pub type AuthResult = Result<ApiResponse<TokenResponse>, AuthError>;

/// Validated login input. `identifier` is a username or an email.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Internal failure: either a rejection with its final response, or
/// something unexpected that still needs the operation prefix.
enum Failure {
    Rejected(AuthError),
    Unexpected(String),
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        Failure::Unexpected(err.to_string())
    }
}

impl From<PasswordError> for Failure {
    fn from(err: PasswordError) -> Self {
        Failure::Unexpected(err.to_string())
    }
}

impl From<TokenError> for Failure {
    fn from(err: TokenError) -> Self {
        Failure::Unexpected(err.to_string())
    }
}

fn email_taken(email: &str) -> AuthError {
    AuthError::conflict(format!("User with email {} already exists.", email))
}

fn username_taken(username: &str) -> AuthError {
    AuthError::conflict(format!("Username {} is already taken.", username))
}

pub struct AuthenticationService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
    hasher: PasswordHasher,
    policy: UserPolicy,
}

impl AuthenticationService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            hasher,
            policy: UserPolicy::default(),
        }
    }

    pub async fn register(&self, account: &NewAccount) -> AuthResult {
        match self.create_account(account).await {
            Ok(user) => {
                tracing::info!("User created: {} ({})", user.username, user.email);
            }
            Err(Failure::Rejected(err)) => return Err(err),
            Err(Failure::Unexpected(message)) => {
                tracing::error!("Registration failed for {}: {}", account.username, message);
                return Err(AuthError::internal(format!("Registration failed: {}", message)));
            }
        }

        let credentials = Credentials {
            identifier: account.email.clone(),
            password: account.password.clone(),
        };
        self.login(&credentials).await
    }

    pub async fn login(&self, credentials: &Credentials) -> AuthResult {
        match self.authenticate(credentials).await {
            Ok(response) => Ok(response),
            Err(Failure::Rejected(err)) => Err(err),
            Err(Failure::Unexpected(message)) => {
                tracing::error!("Login failed: {}", message);
                Err(AuthError::internal(format!("Login failed: {}", message)))
            }
        }
    }

    async fn create_account(&self, account: &NewAccount) -> Result<User, Failure> {
        if self.users.find_by_email(&account.email).await?.is_some() {
            tracing::warn!("Email already exists: {}", account.email);
            return Err(Failure::Rejected(email_taken(&account.email)));
        }

        if self.users.find_by_username(&account.username).await?.is_some() {
            tracing::warn!("Username already exists: {}", account.username);
            return Err(Failure::Rejected(username_taken(&account.username)));
        }

        let violations = self
            .policy
            .check(&account.username, &account.email, &account.password);
        if !violations.is_empty() {
            tracing::warn!("Rejected account {}: {:?}", account.username, violations);
            return Err(Failure::Rejected(AuthError::validation(format!(
                "Unable to register user. {}",
                violations.join(", ")
            ))));
        }

        let password_hash = self.hasher.hash(&account.password).await?;
        let new_user = NewUser {
            username: account.username.clone(),
            email: account.email.clone(),
            password_hash,
        };

        match self.users.create(new_user).await {
            Ok(user) => Ok(user),
            Err(StoreError::Duplicate { field }) => {
                tracing::warn!("Lost registration race on {} for {}", field, account.username);
                let err = match field {
                    UniqueField::Email => email_taken(&account.email),
                    UniqueField::Username => username_taken(&account.username),
                };
                Err(Failure::Rejected(err))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<ApiResponse<TokenResponse>, Failure> {
        let user = match self.users.find_by_username(&credentials.identifier).await? {
            Some(user) => Some(user),
            None => self.users.find_by_email(&credentials.identifier).await?,
        };

        let Some(user) = user else {
            tracing::warn!("Login rejected: unknown identifier");
            return Err(Failure::Rejected(AuthError::invalid_credentials()));
        };

        if !self.hasher.verify(&credentials.password, &user.password_hash).await? {
            tracing::warn!("Login rejected: wrong password for {}", user.username);
            return Err(Failure::Rejected(AuthError::invalid_credentials()));
        }

        let token = self.tokens.issue(&user)?;
        tracing::info!("User logged in: {}", user.username);

        Ok(ApiResponse::success(
            LOGIN_SUCCESS_MESSAGE,
            TokenResponse {
                token,
                username: Some(user.username),
                email: Some(user.email),
            },
        ))
    }
}
