//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LINDEN_DATA_DIR` - Directory for durable snapshots (default: ./data)
//! - `LINDEN_AUTH_TIMEOUT_SECS` - Auth backend timeout (default: 10)
//! - `WISHLIST_API_URL` - Base URL of the wishlist service; the remote
//!   wishlist is disabled when unset
//! - `WISHLIST_API_TOKEN` - Bearer token for the wishlist service
//!   (required when `WISHLIST_API_URL` is set)
//! - `WISHLIST_API_TIMEOUT_SECS` - Wishlist request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory durable snapshots are written to
    pub data_dir: PathBuf,
    /// Timeout applied to auth backend calls
    pub auth_timeout: Duration,
    /// Wishlist service configuration; `None` disables the remote
    /// wishlist
    pub wishlist_api: Option<WishlistApiConfig>,
}

/// Wishlist service configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct WishlistApiConfig {
    /// Base URL of the wishlist service (always ends with a slash so
    /// endpoint paths join cleanly)
    pub base_url: Url,
    /// Bearer token presented on every request
    pub api_token: SecretString,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for WishlistApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse, or if
    /// `WISHLIST_API_URL` is set without `WISHLIST_API_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LINDEN_DATA_DIR", "./data"));
        let auth_timeout = get_timeout_secs("LINDEN_AUTH_TIMEOUT_SECS", 10)?;
        let wishlist_api = WishlistApiConfig::from_env()?;

        Ok(Self {
            data_dir,
            auth_timeout,
            wishlist_api,
        })
    }
}

impl WishlistApiConfig {
    /// Load the wishlist service configuration, if configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL or timeout fails to parse, or if
    /// the token is missing while the URL is set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(raw_url) = get_optional_env("WISHLIST_API_URL") else {
            return Ok(None);
        };

        // A trailing slash keeps Url::join from replacing the last path
        // segment
        let normalized = if raw_url.ends_with('/') {
            raw_url
        } else {
            format!("{raw_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| {
            ConfigError::InvalidEnvVar("WISHLIST_API_URL".to_string(), e.to_string())
        })?;

        let api_token = get_optional_env("WISHLIST_API_TOKEN")
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("WISHLIST_API_TOKEN".to_string()))?;

        let timeout = get_timeout_secs("WISHLIST_API_TIMEOUT_SECS", 10)?;

        Ok(Some(Self {
            base_url,
            api_token,
            timeout,
        }))
    }
}

/// Get an environment variable, or a default if unset.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable if set and non-empty.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a whole-seconds timeout variable.
fn get_timeout_secs(name: &str, default: u64) -> Result<Duration, ConfigError> {
    match get_optional_env(name) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        None => Ok(Duration::from_secs(default)),
    }
}
