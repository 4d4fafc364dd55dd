//! Mock server helpers for integration tests
//!
//! Starts a wiremock server standing in for the CloudVault API and builds an
//! `ApiClient` pointed at it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cloudvault::client::{ApiClient, Session, TokenStore};
use cloudvault::shared::AppConfig;
use wiremock::MockServer;

/// Token store that records how often it was written and cleared
#[derive(Debug, Clone, Default)]
pub struct CountingTokenStore {
    token: Arc<Mutex<Option<String>>>,
    saves: Arc<AtomicUsize>,
    clears: Arc<AtomicUsize>,
}

impl CountingTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.lock().unwrap() = Some(token.to_string());
        store
    }

    pub fn stored(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl TokenStore for CountingTokenStore {
    fn load(&self) -> std::io::Result<Option<String>> {
        Ok(self.stored())
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

/// A running mock API plus a client wired to it
pub struct TestApi {
    pub server: MockServer,
    pub store: CountingTokenStore,
    pub api: ApiClient,
}

impl TestApi {
    /// Client with no stored token
    pub async fn anonymous() -> Self {
        Self::start(CountingTokenStore::default()).await
    }

    /// Client whose store already holds `token`
    pub async fn signed_in(token: &str) -> Self {
        Self::start(CountingTokenStore::with_token(token)).await
    }

    async fn start(store: CountingTokenStore) -> Self {
        let server = MockServer::start().await;
        let config = AppConfig::builder()
            .api_url(format!("{}/api", server.uri()))
            .timeout(Duration::from_secs(5))
            .persist_token(false)
            .build()
            .expect("mock server URL is valid");
        let session = Arc::new(Session::new(Box::new(store.clone())));
        let api = ApiClient::new(config, session).expect("client builds");
        Self { server, store, api }
    }

    /// Number of requests the mock server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
