//! Registry connection settings
//!
//! Credentials and endpoint are carried by an explicit [`RegistryConfig`]
//! handed to the transport constructor. [`RegistryConfig::from_env`] is a
//! convenience for binaries; library code never reads the environment.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default EZID identifier endpoint
pub const DEFAULT_BASE_URL: &str = "https://ezid.cdlib.org/id";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const ENV_USERNAME: &str = "EZID_USERNAME";
pub const ENV_PASSWORD: &str = "EZID_PASSWORD";
pub const ENV_BASE_URL: &str = "EZID_BASE_URL";
pub const ENV_TIMEOUT: &str = "EZID_TIMEOUT_SECS";

/// Configuration errors, raised before any network activity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("EZID_USERNAME and EZID_PASSWORD must be set")]
    MissingCredentials,
    #[error("Invalid value for {key}: {detail}")]
    InvalidValue { key: String, detail: String },
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Connection settings for a registry transport
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Identifier endpoint; identifiers are appended as `<base_url>/<id>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl RegistryConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            username: username.into(),
            password: password.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// URL of one identifier under the base endpoint
    ///
    /// Each path segment is percent-encoded; `/` and the scheme's `:` stay
    /// literal so the registry sees the identifier in registry form.
    pub fn identifier_url(&self, identifier: &str) -> String {
        let path = identifier
            .split('/')
            .map(|segment| urlencoding::encode(segment).replace("%3A", ":"))
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                detail: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_seconds".to_string(),
                detail: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Load settings from the process environment
    ///
    /// Reads `EZID_USERNAME` and `EZID_PASSWORD` (required) plus the
    /// optional `EZID_BASE_URL` and `EZID_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (Some(username), Some(password)) = (non_empty(ENV_USERNAME), non_empty(ENV_PASSWORD))
        else {
            return Err(ConfigError::MissingCredentials);
        };

        let mut config = Self::new(username, password);
        if let Some(base_url) = non_empty(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = non_empty(ENV_TIMEOUT) {
            let seconds = timeout.trim().parse::<u64>();
            config.timeout_seconds = seconds.map_err(|e| ConfigError::InvalidValue {
                key: ENV_TIMEOUT.to_string(),
                detail: format!("{}", e),
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
