//! Configuration types for article-sync

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Remote service configuration (endpoint location and request behavior)
///
/// Groups settings describing how the controller reaches the article
/// service. Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the article service (default: "http://localhost:9000")
    ///
    /// Endpoint paths (`/api/login`, `/api/articles`) are joined onto this.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

/// Client-side credential validation thresholds
///
/// The remote service enforces its own rules; these gate requests locally
/// so obviously-bad credentials never leave the process. Confirm them
/// against the deployed service before tightening or loosening.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum trimmed username length accepted by `login` (default: 3)
    #[serde(default = "default_min_username_len")]
    pub min_username_len: usize,

    /// Minimum trimmed password length accepted by `login` (default: 8)
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_len: default_min_username_len(),
            min_password_len: default_min_password_len(),
        }
    }
}

/// Session persistence configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Well-known key the session token is stored under (default: "token")
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

/// Top-level configuration for the controller
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Credential validation thresholds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Validate the configuration, returning the first problem found
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL cannot have paths joined
    /// onto it, a validation threshold is zero, the request timeout is
    /// zero, or the token key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.cannot_be_a_base() {
            return Err(Error::config(
                "service.base_url",
                format!("URL cannot serve as a base: {}", self.service.base_url),
            ));
        }
        if self.service.request_timeout.is_zero() {
            return Err(Error::config(
                "service.request_timeout",
                "request timeout must be greater than zero",
            ));
        }
        if self.validation.min_username_len == 0 {
            return Err(Error::config(
                "validation.min_username_len",
                "minimum username length must be at least 1",
            ));
        }
        if self.validation.min_password_len == 0 {
            return Err(Error::config(
                "validation.min_password_len",
                "minimum password length must be at least 1",
            ));
        }
        if self.session.token_key.trim().is_empty() {
            return Err(Error::config(
                "session.token_key",
                "token key must not be empty",
            ));
        }
        Ok(())
    }
}

// The literal is a valid URL, so the expect cannot fire
#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse("http://localhost:9000").expect("default base URL is valid")
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_min_username_len() -> usize {
    3
}

fn default_min_password_len() -> usize {
    8
}

fn default_token_key() -> String {
    "token".to_string()
}

// Duration serialization helper (integer seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
