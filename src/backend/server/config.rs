/**
 * Server Configuration
 *
 * Loaded from environment variables (a `.env` file is read first by the
 * binary). Every value has a development default except `JWT_SECRET`, which
 * falls back to a fixed key only in debug builds.
 *
 * | variable             | default                           |
 * |----------------------|-----------------------------------|
 * | `DATABASE_URL`       | `sqlite://storefront.db?mode=rwc` |
 * | `JWT_SECRET`         | dev fallback (debug builds only)  |
 * | `JWT_VALID_ISSUER`   | `storefront-api`                  |
 * | `JWT_VALID_AUDIENCE` | `storefront-ui`                   |
 * | `JWT_EXPIRY_HOURS`   | `3` (1 to 8760)                   |
 * | `BCRYPT_COST`        | `bcrypt::DEFAULT_COST`            |
 * | `SERVER_HOST`        | `0.0.0.0`                         |
 * | `SERVER_PORT`        | `5286`                            |
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::auth::sessions::JwtSettings;
use crate::backend::error::BackendError;
use crate::shared::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://storefront.db?mode=rwc";
const DEV_JWT_SECRET: &str = "storefront-development-secret-change-me";
const DEFAULT_ISSUER: &str = "storefront-api";
const DEFAULT_AUDIENCE: &str = "storefront-ui";
const DEFAULT_EXPIRY_HOURS: i64 = 3;
// One year at most
const EXPIRY_HOURS_RANGE: RangeInclusive<i64> = 1..=8760;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5286;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt: JwtSettings,
    pub bcrypt_cost: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
            _ => return Err(ConfigError::MissingValue("JWT_SECRET")),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt: JwtSettings {
                secret,
                issuer: lookup("JWT_VALID_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
                audience: lookup("JWT_VALID_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
                expiry_hours: expiry_hours(&lookup)?,
            },
            bcrypt_cost: parse_var(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            host: parse_var(&lookup, "SERVER_HOST", DEFAULT_HOST)?,
            port: parse_var(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

fn expiry_hours<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let hours = parse_var(lookup, "JWT_EXPIRY_HOURS", DEFAULT_EXPIRY_HOURS)?;
    if !EXPIRY_HOURS_RANGE.contains(&hours) {
        return Err(ConfigError::InvalidValue {
            name: "JWT_EXPIRY_HOURS",
            value: hours.to_string(),
        });
    }
    Ok(hours)
}

/// Connect to the database and run migrations
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database at {}", database_url);
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Single-connection in-memory database with migrations applied.
///
/// One connection only: every new connection to `sqlite::memory:` opens a
/// separate, empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, BackendError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt.secret, "s3cret");
        assert_eq!(config.jwt.issuer, "storefront-api");
        assert_eq!(config.jwt.audience, "storefront-ui");
        assert_eq!(config.jwt.expiry_hours, 3);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5286");
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s3cret"),
            ("JWT_EXPIRY_HOURS", "12"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("BCRYPT_COST", "4"),
        ]))
        .unwrap();
        assert_eq!(config.jwt.expiry_hours, 12);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "x"), ("SERVER_PORT", "http")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "SERVER_PORT", .. })
        ));
    }

    #[test]
    fn test_expiry_hours_out_of_range() {
        for hours in ["0", "-3", "8761", "9223372036854775807"] {
            let result = ServerConfig::from_lookup(lookup(&[
                ("JWT_SECRET", "x"),
                ("JWT_EXPIRY_HOURS", hours),
            ]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { name: "JWT_EXPIRY_HOURS", .. })),
                "accepted {}",
                hours
            );
        }

        let config = ServerConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "x"),
            ("JWT_EXPIRY_HOURS", "8760"),
        ]))
        .unwrap();
        assert_eq!(config.jwt.expiry_hours, 8760);
    }

    #[test]
    fn test_missing_secret_falls_back_in_debug() {
        // Test builds have debug assertions on
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.jwt.secret, DEV_JWT_SECRET);
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("JWT_SECRET", "env-secret");
        std::env::set_var("SERVER_PORT", "6001");
        let config = ServerConfig::from_env();
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("SERVER_PORT");

        let config = config.unwrap();
        assert_eq!(config.jwt.secret, "env-secret");
        assert_eq!(config.port, 6001);
    }

    #[tokio::test]
    async fn test_connect_in_memory_runs_migrations() {
        let pool = connect_in_memory().await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_load_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("users.db").display());
        let pool = load_database(&url).await.unwrap();
        assert!(dir.path().join("users.db").exists());
        pool.close().await;
    }
}
