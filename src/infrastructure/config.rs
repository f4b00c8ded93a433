//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file when present). Every setting has a default, so an empty
//! environment yields a working local server.
//!
//! # Example
//!
//! ```rust,ignore
//! use minibank::infrastructure::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Listening on {}", config.bind_address());
//! ```

use std::env;
use std::num::ParseIntError;

use chrono::Duration;

/// Default host the HTTP server binds to.
pub const DEFAULT_APP_HOST: &str = "127.0.0.1";
/// Default HTTP port.
pub const DEFAULT_APP_PORT: u16 = 3000;
/// Default session lifetime in minutes.
pub const DEFAULT_SESSION_TTL_MINUTES: u32 = 60;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration.
///
/// # Fields
///
/// - `app_host`: Host address for the HTTP server
/// - `app_port`: Port number for the HTTP server
/// - `session_ttl_minutes`: How long a login stays valid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Session lifetime in minutes.
    pub session_ttl_minutes: u32,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `APP_HOST`: Server host (optional, default: "127.0.0.1")
    /// - `APP_PORT`: Server port (optional, default: 3000)
    /// - `SESSION_TTL_MINUTES`: Session lifetime (optional, default: 60)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed, or if the session lifetime is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let app_host = get_optional_env("APP_HOST", DEFAULT_APP_HOST.to_string());
        let app_port = get_optional_env_parsed("APP_PORT", DEFAULT_APP_PORT)?;
        let session_ttl_minutes =
            get_optional_env_parsed("SESSION_TTL_MINUTES", DEFAULT_SESSION_TTL_MINUTES)?;

        if session_ttl_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_TTL_MINUTES".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self::new(app_host, app_port, session_ttl_minutes))
    }

    /// Creates a new `AppConfig` with the given values.
    #[must_use]
    pub const fn new(app_host: String, app_port: u16, session_ttl_minutes: u32) -> Self {
        Self {
            app_host,
            app_port,
            session_ttl_minutes,
        }
    }

    /// Returns `host:port` suitable for binding a listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    /// Returns the session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(i64::from(self.session_ttl_minutes))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_APP_HOST.to_string(),
            DEFAULT_APP_PORT,
            DEFAULT_SESSION_TTL_MINUTES,
        )
    }
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the variable is set but cannot be parsed.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(|_| Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .trim()
        .parse()
        .map_err(|error: ParseIntError| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}
