//! Client configuration
//!
//! Where the client finds the API. Validated on build so a typo in
//! `CLIENT_API_URL` fails at startup rather than on the first request.

use reqwest::Url;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the authentication API, without a trailing slash
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            validate_url(url)?;
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self
                .server_url
                .map(|url| url.trim_end_matches('/').to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
