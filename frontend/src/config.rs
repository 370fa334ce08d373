//! # Client Configuration
//!
//! Configuration loaded from environment variables (a `.env` file in the
//! working directory is read first).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `API_URL` | `http://localhost:3000` | Backend base URL |
//! | `JOURNAL_STORAGE_PATH` | `data/session.json` | Token file for native [`FileStorage`](crate::storage::FileStorage) |
//!
//! ```rust,no_run
//! use frontend::config::FrontendConfig;
//!
//! let config = FrontendConfig::from_env()?;
//! println!("talking to {}", config.api_url);
//! # Ok::<(), frontend::config::ConfigError>(())
//! ```

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_STORAGE_PATH: &str = "data/session.json";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Backend base URL without trailing slash
    pub api_url: String,

    /// File holding the persisted token on native builds
    pub storage_path: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl FrontendConfig {
    /// Load configuration from the environment and validate it.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }

        let api_url = get_env_or("API_URL", DEFAULT_API_URL);
        let storage_path = get_env_parse::<PathBuf>("JOURNAL_STORAGE_PATH")
            .or_else(|e| match e {
                ConfigError::MissingEnv(_) => Ok(PathBuf::from(DEFAULT_STORAGE_PATH)),
                other => Err(other),
            })?;

        Self::new(api_url).map(|config| config.with_storage_path(storage_path))
    }

    /// Config for an explicit base URL; a trailing `/` is dropped.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_scheme =
            self.api_url.starts_with("http://") || self.api_url.starts_with("https://");
        if !has_scheme || self.api_url.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                name: "API_URL",
                reason: format!("'{}' is not an http(s) URL", self.api_url),
            });
        }
        Ok(())
    }
}

// region:    --- Env helpers

/// Get an environment variable by name.
fn get_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset or empty.
fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get and parse an environment variable.
fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| ConfigError::WrongFormat(name))
}

// endregion: --- Env helpers

// region:    --- Error

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Environment variable {0} has the wrong format")]
    WrongFormat(&'static str),

    #[error("Invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = FrontendConfig::new("https://journal.example.com/").unwrap();
        assert_eq!(config.api_url, "https://journal.example.com");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = FrontendConfig::new("localhost:3000").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "API_URL", .. }));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::remove_var("API_URL");
        env::remove_var("JOURNAL_STORAGE_PATH");

        let config = FrontendConfig::from_env().unwrap();
        assert_eq!(config, FrontendConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        env::set_var("API_URL", "https://api.journal.test/");
        env::set_var("JOURNAL_STORAGE_PATH", "/tmp/journal/token.json");

        let config = FrontendConfig::from_env().unwrap();
        env::remove_var("API_URL");
        env::remove_var("JOURNAL_STORAGE_PATH");

        assert_eq!(config.api_url, "https://api.journal.test");
        assert_eq!(config.storage_path, PathBuf::from("/tmp/journal/token.json"));
    }
}
