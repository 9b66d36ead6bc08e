use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://localhost:5286";

/// Directory name under the platform data directory
const APP_DIR: &str = "storefront";

const SESSION_FILE: &str = "session.json";

/// Client configuration: where the API lives and where the session is kept.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    data_dir: PathBuf,
}

impl Config {
    /// Read `CLIENT_API_URL` and `STOREFRONT_DATA_DIR`, falling back to
    /// `http://localhost:5286` and the platform data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let data_dir = std::env::var_os("STOREFRONT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self::with_builder(AppConfig::builder().server_url(server_url), data_dir)
    }

    pub fn with_builder(
        builder: AppConfigBuilder,
        data_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
            data_dir: data_dir.into(),
        })
    }

    pub fn with_server_url(self, url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url), self.data_dir)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File holding the persisted `authToken` / `currentUser` pair
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push(APP_DIR);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> Config {
        Config::with_builder(AppConfig::builder().server_url(url), "/tmp/storefront-test").unwrap()
    }

    #[test]
    fn test_api_url() {
        let config = config("http://localhost:5286");
        assert_eq!(config.api_url("/User/login"), "http://localhost:5286/User/login");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = config("https://shop.example.com/");
        assert_eq!(config.api_url("/User/register"), "https://shop.example.com/User/register");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = Config::with_builder(AppConfig::builder().server_url("ftp://nope"), "/tmp");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_session_path() {
        let config = config("http://localhost:5286");
        assert_eq!(
            config.session_path(),
            PathBuf::from("/tmp/storefront-test/session.json")
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_defaults() {
        std::env::remove_var("CLIENT_API_URL");
        std::env::set_var("STOREFRONT_DATA_DIR", "/tmp/storefront-env");
        let config = Config::from_env();
        std::env::remove_var("STOREFRONT_DATA_DIR");

        let config = config.unwrap();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.data_dir(), Path::new("/tmp/storefront-env"));
    }
}
