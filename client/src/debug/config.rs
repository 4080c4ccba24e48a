//! Debug configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "swap_client=info,warn";
pub const LOG_FILE_NAME: &str = "swapdesk.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Directory holding the daily rotated log files
    pub log_dir: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Write JSON lines instead of plain text
    pub json: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("SWAPDESK_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            json: lookup("SWAPDESK_LOG_JSON").map(|v| v == "1").unwrap_or(false),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs").join("swapdesk.log"));
    }

    #[test]
    fn test_overrides() {
        let config = DebugConfig::from_lookup(lookup_from(&[
            ("SWAPDESK_LOG_DIR", "/tmp/swapdesk"),
            ("RUST_LOG", "swap_client=debug"),
            ("SWAPDESK_LOG_JSON", "1"),
        ]));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/swapdesk"));
        assert!(config.json);
        assert_eq!(config.log_level, "swap_client=debug");
    }
}
