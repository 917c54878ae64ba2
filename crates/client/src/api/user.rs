//! Current-user fetch and session restore.

use reqwest::{Method, header};

use swapmart_core::UserDetails;

use crate::error::{ApiError, AuthCallError};

use super::ApiClient;

impl ApiClient {
    /// Fetch the signed-in user's record (authenticated).
    ///
    /// The caller replaces its copy wholesale; the record is never locally
    /// authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not
    /// be refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn current_user(&self) -> Result<UserDetails, AuthCallError> {
        let response = self
            .auth_fetch(Method::GET, "/core/current_user/", None)
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        if !response.status().is_success() {
            return Err(AuthCallError::Api(ApiError::Status(response.status())));
        }

        Ok(response.json().await.map_err(ApiError::Http)?)
    }

    /// Restore a persisted session at startup.
    ///
    /// - Access token present and the session is signed in (or remembered):
    ///   fetch the current user; on success, re-assert the signed-in flag
    ///   and return the record. An expired session returns `None` (the
    ///   expiry handler has already fired).
    /// - Access token present but neither signed in nor remembered: sign
    ///   out to invalidate the stale token.
    /// - No access token: drop any orphaned refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::Api`] only for transport-level failures of
    /// the user fetch.
    pub async fn bootstrap(&self) -> Result<Option<UserDetails>, AuthCallError> {
        let has_token = self.session().access_token().is_some();

        if has_token && (self.session().is_signed_in() || self.session().remember_me()) {
            match self.current_user().await {
                Ok(user) => {
                    self.session().refresh_signed_in_flag();
                    Ok(Some(user))
                }
                Err(AuthCallError::SessionExpired) => Ok(None),
                Err(err) => Err(err),
            }
        } else if has_token {
            self.sign_out().await;
            Ok(None)
        } else {
            self.session().discard_refresh_token();
            Ok(None)
        }
    }

    /// Fetch the user record with an explicit access token, outside the
    /// refresh protocol. Used during sign-in, where a 401 must roll back
    /// rather than refresh.
    pub(crate) async fn fetch_user_with_token(
        &self,
        access: &str,
    ) -> Result<UserDetails, ApiError> {
        let response = self
            .http()
            .get(self.url("/core/current_user/"))
            .header(header::AUTHORIZATION, format!("Bearer {access}"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
