/**
 * User Model and Database Operations
 *
 * Users live in a single `users` table. Username and email are unique
 * case-insensitively: the store keeps upper-cased `normalized_*` copies under
 * UNIQUE constraints and looks users up through them.
 *
 * The constraints are the source of truth for uniqueness. Callers may check
 * for an existing user first, but a concurrent insert can still win the race;
 * `create` reports that as `StoreError::Duplicate` with the offending column.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username as entered at registration
    pub username: String,
    /// Upper-cased username used for lookups
    pub normalized_username: String,
    /// Email as entered at registration
    pub email: String,
    /// Upper-cased email used for lookups
    pub normalized_email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Random stamp generated at creation
    pub security_stamp: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Column that violated a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Username => write!(f, "username"),
            Self::Email => write!(f, "email"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this {field} already exists")]
    Duplicate { field: UniqueField },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the authentication service needs.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn create(&self, user: NewUser) -> Result<User, StoreError>;
}

pub fn normalize(value: &str) -> String {
    value.to_uppercase()
}

const USER_COLUMNS: &str = "id, username, normalized_username, email, normalized_email, \
                            password_hash, security_stamp, created_at";

/// SQLite-backed user store
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn find_by(&self, column: &str, value: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(normalize(value))
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.find_by("normalized_username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.find_by("normalized_email", email).await
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            normalized_username: normalize(&new_user.username),
            normalized_email: normalize(&new_user.email),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            security_stamp: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, normalized_username, email, normalized_email,
                               password_hash, security_stamp, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.normalized_username)
        .bind(&user.email)
        .bind(&user.normalized_email)
        .bind(&user.password_hash)
        .bind(&user.security_stamp)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(err) => Err(classify_insert_error(err)),
        }
    }
}

fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            // SQLite reports "UNIQUE constraint failed: users.normalized_email"
            let field = if db_err.message().contains("normalized_email") {
                UniqueField::Email
            } else {
                UniqueField::Username
            };
            return StoreError::Duplicate { field };
        }
    }
    StoreError::Database(err)
}
