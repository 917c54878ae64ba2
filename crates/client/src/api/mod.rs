//! REST API client for the marketplace backend.
//!
//! # Architecture
//!
//! - JSON bodies throughout, paths relative to the configured base URL
//! - Bearer access token on authenticated calls
//! - Transparent retry-once-after-refresh on 401 (see [`ApiClient::auth_fetch`])
//! - Session expiry is detected here and nowhere else after sign-in
//!
//! # Example
//!
//! ```rust,ignore
//! use swapmart_client::api::ApiClient;
//!
//! let client = ApiClient::new(&config, session)
//!     .with_session_expired_handler(|| tracing::info!("session expired"));
//!
//! let user = client
//!     .sign_in("ada@example.com", "Hunter2x", AccountType::Customer, true)
//!     .await?;
//! ```

mod auth;
mod listings;
mod user;

pub use auth::SignUpOutcome;
pub use listings::OrderRequest;

use std::sync::Arc;

use reqwest::{Method, Response, StatusCode, header};

use swapmart_core::TokenPair;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::SessionStore;

/// State of one authenticated call in the retry protocol.
///
/// A call starts `Authorized`; the single transition to `Refreshing`
/// happens on the first 401, and a `Refreshing` call never transitions
/// again - whatever the re-issued request returns is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthState {
    Authorized,
    Refreshing,
}

type SessionExpiredHandler = Arc<dyn Fn() + Send + Sync>;

/// Client for the marketplace REST API.
///
/// Cheap to clone; clones share the HTTP connection pool, the session
/// store, and the session-expired handler.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    on_session_expired: Option<SessionExpiredHandler>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// No request timeout is set: a hung request stays pending, matching
    /// the UI contract of an indefinite pending state.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                session,
                on_session_expired: None,
            }),
        }
    }

    /// Install a handler invoked exactly once whenever a refresh attempt
    /// fails and the session is cleared. The UI uses this to open the
    /// session-expired dialog.
    #[must_use]
    pub fn with_session_expired_handler(self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        let inner = &self.inner;
        Self {
            inner: Arc::new(ApiClientInner {
                http: inner.http.clone(),
                base_url: inner.base_url.clone(),
                session: inner.session.clone(),
                on_session_expired: Some(Arc::new(handler)),
            }),
        }
    }

    /// The session store this client reads and writes.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    // =========================================================================
    // Authenticated Fetch
    // =========================================================================

    /// Issue an authenticated request.
    ///
    /// Attaches the persisted access token as a bearer credential. On a 401
    /// response, attempts exactly one token refresh and re-issues the
    /// original request once with the new token; the retried response is
    /// returned as-is, even if it is again 401. If the refresh fails (no
    /// refresh token, or the refresh endpoint rejects), the session is
    /// cleared, the session-expired handler fires, and `Ok(None)` is
    /// returned.
    ///
    /// Every authenticated operation goes through this path; it is the sole
    /// detector of session expiry after sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the transport fails, or
    /// [`ApiError::Json`] if a refresh response body is malformed.
    pub async fn auth_fetch(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<Response>, ApiError> {
        let mut state = AuthState::Authorized;
        let mut token = self.inner.session.access_token().unwrap_or_default();

        loop {
            let response = self
                .bearer_request(method.clone(), path, &token, body)
                .send()
                .await?;

            if state == AuthState::Refreshing || response.status() != StatusCode::UNAUTHORIZED {
                return Ok(Some(response));
            }

            state = AuthState::Refreshing;
            match self.refresh_access_token().await? {
                Some(new_access) => {
                    tracing::debug!(path, "Access token refreshed, retrying request");
                    token = new_access;
                }
                None => {
                    tracing::info!(path, "Token refresh failed, session expired");
                    self.inner.session.clear();
                    if let Some(handler) = &self.inner.on_session_expired {
                        handler();
                    }
                    return Ok(None);
                }
            }
        }
    }

    /// Attempt one token refresh with the persisted refresh token.
    ///
    /// Returns the new access token on success (persisting it, and the
    /// rotated refresh token when the endpoint returns one), `None` when no
    /// refresh token exists or the endpoint rejects it.
    async fn refresh_access_token(&self) -> Result<Option<String>, ApiError> {
        let Some(refresh) = self.inner.session.refresh_token() else {
            return Ok(None);
        };

        let response = self
            .inner
            .http
            .post(self.url("/token/refresh/"))
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let tokens: TokenPair = response.json().await?;
        self.inner.session.store_tokens(&tokens);
        Ok(Some(tokens.access))
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    fn bearer_request(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&serde_json::Value>,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .http
            .request(method, self.url(path))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        request
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("session", &self.inner.session)
            .finish()
    }
}
