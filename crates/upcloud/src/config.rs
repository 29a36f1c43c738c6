//! Client configuration

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.upcloud.com/1.3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_USERNAME: &str = "UPCLOUD_USERNAME";
pub const ENV_PASSWORD: &str = "UPCLOUD_PASSWORD";
pub const ENV_API_URL: &str = "UPCLOUD_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "UPCLOUD_TIMEOUT_SECS";

/// Connection settings shared by every call of a client
///
/// Set once at construction and never mutated afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,

    pub username: String,

    pub password: String,

    /// Default per-call timeout; individual requests may override it
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create ClientConfig from environment variables
    ///
    /// `UPCLOUD_USERNAME` and `UPCLOUD_PASSWORD` are required;
    /// `UPCLOUD_API_URL` and `UPCLOUD_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self> {
        let username = required_var(ENV_USERNAME)?;
        let password = required_var(ENV_PASSWORD)?;

        let mut config = Self::new(username, password);

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config = config.with_base_url(url);
        }

        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be used to make calls
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(Error::InvalidConfig("username must not be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(Error::InvalidConfig("password must not be empty".to_string()));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(Error::InvalidConfig(format!(
                "base URL must be http(s), got {:?}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be non-zero".to_string()));
        }
        Ok(())
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::InvalidConfig(format!("{name} is not set"))),
    }
}
