//! # Providers
//!
//! Process-wide composition root: one query cache and one authentication
//! context per application instance.
//!
//! ```text
//! Providers
//! ├── QueryClient    (outer, shared cache)
//! └── AuthContext    (holds the QueryClient and the TokenStore)
//! ```
//!
//! The authentication context is built on top of the cache so that signing
//! out can drop every cached query.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::core::{Result, TokenProvider};
use crate::services::query::QueryClient;
use crate::services::token::{TokenStore, ACCESS_TOKEN_KEY};

/// Authentication state of the current user.
#[derive(Debug)]
pub struct AuthContext {
    store: TokenStore,
    queries: Arc<QueryClient>,
}

impl AuthContext {
    pub fn new(store: TokenStore, queries: Arc<QueryClient>) -> Self {
        Self { store, queries }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Current access token, `None` if absent or blank
    pub fn token(&self) -> Option<String> {
        self.store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Persist a token obtained out of band (pasted from the web portal).
    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, token.trim())?;
        self.queries.clear();
        tracing::info!("Access token stored");
        Ok(())
    }

    /// Forget the token and every query cached under it.
    pub fn sign_out(&self) -> Result<()> {
        self.queries.clear();
        self.store.remove(ACCESS_TOKEN_KEY)?;
        tracing::info!("Signed out, query cache cleared");
        Ok(())
    }

    pub fn queries(&self) -> &Arc<QueryClient> {
        &self.queries
    }
}

impl TokenProvider for AuthContext {
    fn access_token(&self) -> Option<String> {
        self.token()
    }
}

/// Application-lifetime service objects.
///
/// Built once when the window is created; cloning shares the same instances.
#[derive(Debug, Clone)]
pub struct Providers {
    pub query_client: Arc<QueryClient>,
    pub auth: Arc<AuthContext>,
}

impl Providers {
    pub fn new(config: &ClientConfig) -> Self {
        let query_client = Arc::new(QueryClient::new(config.cache_stale_time));
        let store = TokenStore::new(config.storage_path.clone());
        let auth = Arc::new(AuthContext::new(store, query_client.clone()));

        tracing::info!(
            storage = %config.storage_path.display(),
            stale_secs = config.cache_stale_time.as_secs(),
            "Providers initialized"
        );

        Self { query_client, auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config(name: &str) -> ClientConfig {
        let dir = std::env::temp_dir().join(format!(
            "swapdesk-providers-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        ClientConfig {
            storage_path: dir.join("storage.json"),
            cache_stale_time: Duration::from_secs(60),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_auth_shares_query_client() {
        let providers = Providers::new(&test_config("shared"));
        assert!(Arc::ptr_eq(&providers.query_client, providers.auth.queries()));
    }

    #[test]
    fn test_sign_in_and_out() {
        let providers = Providers::new(&test_config("sign"));
        assert!(!providers.auth.is_authenticated());

        providers.auth.sign_in("  abc  ").unwrap();
        assert_eq!(providers.auth.access_token(), Some("abc".to_string()));

        providers.query_client.set("swap-requests", &vec![1]).unwrap();
        providers.auth.sign_out().unwrap();
        assert!(!providers.auth.is_authenticated());
        assert!(providers.query_client.get::<Vec<u32>>("swap-requests").is_none());
    }

    #[test]
    fn test_clones_share_instances() {
        let providers = Providers::new(&test_config("clone"));
        let other = providers.clone();
        assert!(Arc::ptr_eq(&providers.auth, &other.auth));
    }
}
