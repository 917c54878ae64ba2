//! Integration tests for the SwapMart client.
//!
//! The tests run the real [`ApiClient`] against a [`wiremock`] server, so
//! the whole HTTP path is exercised: URL construction, JSON bodies, bearer
//! headers, and the 401 refresh-and-retry protocol.
//!
//! Run with: `cargo test -p swapmart-integration-tests`

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wiremock::MockServer;

use swapmart_client::api::ApiClient;
use swapmart_client::config::ClientConfig;
use swapmart_client::session::SessionStore;
use swapmart_client::storage::MemoryStorage;
use swapmart_core::TokenPair;

/// A mock backend plus a client wired to it.
pub struct TestContext {
    pub server: MockServer,
    pub client: ApiClient,
    pub session: SessionStore,
    expiry_count: Arc<AtomicUsize>,
}

impl TestContext {
    /// Start a mock server and build a client against it with an in-memory
    /// session.
    ///
    /// # Panics
    ///
    /// Panics if the mock server URL is rejected by the client config.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let session = SessionStore::new(MemoryStorage::new());

        let config = ClientConfig::new(&server.uri(), "unused-session.json")
            .expect("mock server URI should be a valid base URL");

        let expiry_count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&expiry_count);
        let client =
            ApiClient::new(&config, session.clone()).with_session_expired_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        Self {
            server,
            client,
            session,
            expiry_count,
        }
    }

    /// Seed the session as signed in with the given tokens.
    pub fn seed_session(&self, access: &str, refresh: &str) {
        self.session.store_tokens(&TokenPair {
            access: access.to_owned(),
            refresh: Some(refresh.to_owned()),
        });
        self.session.mark_signed_in(true);
    }

    /// How many times the session-expired handler has fired.
    #[must_use]
    pub fn expiry_notifications(&self) -> usize {
        self.expiry_count.load(Ordering::SeqCst)
    }
}

/// A user record body as the backend returns it.
#[must_use]
pub fn user_body(account_type: u8) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "user_type": account_type,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "contact_number": null,
        "address": null,
    })
}
