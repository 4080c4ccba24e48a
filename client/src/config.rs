//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated at startup.
//!
//! | Variable                    | Default                              |
//! |-----------------------------|--------------------------------------|
//! | `API_URL`                   | `http://127.0.0.1:8000/api/swap`     |
//! | `SWAPDESK_STORAGE`          | `.swapdesk/storage.json`             |
//! | `SWAPDESK_CACHE_STALE_SECS` | `30`                                 |
//!
//! Use [`client_config()`] after [`init_config()`] has run once in `main`.

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use crate::core::{AppError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/swap";
pub const DEFAULT_STORAGE_PATH: &str = ".swapdesk/storage.json";
pub const DEFAULT_CACHE_STALE_SECS: u64 = 30;

/// Client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the swap API, without a trailing slash
    pub api_url: String,

    /// JSON file holding persisted client state (the access token)
    pub storage_path: PathBuf,

    /// How long a cached query stays fresh
    pub cache_stale_time: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            cache_stale_time: Duration::from_secs(DEFAULT_CACHE_STALE_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let storage_path = env::var("SWAPDESK_STORAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let cache_stale_secs = match env::var("SWAPDESK_CACHE_STALE_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("SWAPDESK_CACHE_STALE_SECS must be a valid number: {}", e))
            })?,
            Err(_) => DEFAULT_CACHE_STALE_SECS,
        };

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            storage_path,
            cache_stale_time: Duration::from_secs(cache_stale_secs),
        })
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API_URL must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }

        if self.storage_path.as_os_str().is_empty() {
            return Err(AppError::Config("SWAPDESK_STORAGE must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Load, validate and store the global configuration.
///
/// Later calls return the configuration stored by the first one.
pub fn init_config() -> Result<&'static ClientConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }

    let config = ClientConfig::from_env()?;
    config.validate()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Global configuration, falling back to defaults if [`init_config()`] never ran.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://api.local/swap/"), "http://api.local/swap");
        assert_eq!(normalize_base_url("  http://api.local// "), "http://api.local");
        assert_eq!(normalize_base_url("http://api.local"), "http://api.local");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = ClientConfig {
            api_url: "ftp://example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }
}
