//! # Token Storage
//!
//! Persistent client-side key-value storage and the token providers built on it.
//!
//! The store is a flat JSON object on disk, the desktop counterpart of
//! browser local storage. The access token lives under [`ACCESS_TOKEN_KEY`].

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Result, TokenProvider};

/// Storage key of the bearer token
pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// JSON file backed key-value store.
///
/// Every read goes to disk, so values written by another process are picked
/// up on the next call.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value. A missing file, missing key or non-string value is `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(map) => map.get(key).and_then(Value::as_str).map(str::to_string),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read token store");
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&map)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut map = self.load()?;
        if map.remove(key).is_some() {
            self.save(&map)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&content)?;
        Ok(match value {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }

    fn save(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl TokenProvider for TokenStore {
    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }
}

/// Fixed token, for tests and scripted runs.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> TokenStore {
        let dir = std::env::temp_dir().join(format!(
            "swapdesk-token-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        TokenStore::new(dir.join("storage.json"))
    }

    #[test]
    fn test_missing_file_has_no_token() {
        let store = temp_store("missing");
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let store = temp_store("roundtrip");
        store.set(ACCESS_TOKEN_KEY, "abc123").unwrap();
        assert_eq!(store.access_token(), Some("abc123".to_string()));

        store.set("theme", "dark").unwrap();
        store.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let store = temp_store("corrupt");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken::new("t").access_token(), Some("t".to_string()));
        assert_eq!(StaticToken::none().access_token(), None);
    }
}
