#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{MarsPhotosError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const API_KEY_ENV: &str = "NASA_API_KEY";
pub const BASE_URL_ENV: &str = "MARS_PHOTOS_BASE_URL";
pub const TIMEOUT_ENV: &str = "MARS_PHOTOS_TIMEOUT_SECONDS";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Archive API key, forwarded as the `api_key` query parameter.
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Reads `NASA_API_KEY`, `MARS_PHOTOS_BASE_URL` and `MARS_PHOTOS_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with variables resolved by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or_else(|| {
            MarsPhotosError::configuration(format!("{} is not set", API_KEY_ENV))
        })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            config.timeout_seconds = timeout.trim().parse().map_err(|_| {
                MarsPhotosError::configuration(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_ENV, timeout
                ))
            })?;
        }

        Ok(config)
    }

    /// Validates the configuration and returns it with the key and base URL
    /// trimmed and any trailing slash removed from the base URL.
    pub fn normalize(self) -> Result<Self> {
        let normalized = Self {
            api_key: self.api_key.trim().to_string(),
            base_url: self.base_url.trim().trim_end_matches('/').to_string(),
            timeout_seconds: self.timeout_seconds,
        };
        normalized.validate()?;
        Ok(normalized)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        if self.api_key.trim_start().starts_with("${") {
            return Err(MarsPhotosError::configuration(
                "`api_key` refers to an environment variable that is not set",
            ));
        }
        validate_url("base_url", self.base_url.trim())?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
