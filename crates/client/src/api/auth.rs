//! Authentication operations: sign-in, sign-out, sign-up, password reset,
//! and feedback.

use reqwest::{Method, Response, StatusCode, header};
use serde::Deserialize;

use swapmart_core::{AccountType, TokenPair, UserDetails};

use crate::error::{ApiError, AuthCallError, SignInError};

use super::ApiClient;

/// Outcome of a successful sign-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account is active; the user can sign in immediately.
    Registered,
    /// The backend answered 202: registration completes once the user
    /// follows the confirmation email.
    ConfirmationEmailSent,
}

/// Token response whose fields the backend may omit on soft failures.
#[derive(Debug, Deserialize)]
struct IssuedTokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl ApiClient {
    /// Sign in and verify the account type.
    ///
    /// Posts credentials to `/token/`, persists the issued pair, then
    /// fetches the current user with the fresh access token and checks that
    /// the account type matches `attempted`. On success the signed-in and
    /// remember-me flags are persisted and the account type recorded.
    ///
    /// # Errors
    ///
    /// - [`SignInError::InvalidCredentials`] when the backend answers 2xx
    ///   without a token pair; nothing is persisted.
    /// - [`SignInError::WrongAccountType`] when the authenticated account is
    ///   of the other type; the freshly issued tokens are rolled back first,
    ///   leaving no session trace.
    /// - [`SignInError::UserFetch`] when the user record cannot be fetched;
    ///   tokens are rolled back.
    /// - [`SignInError::Api`] when the token request itself fails.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        attempted: AccountType,
        remember_me: bool,
    ) -> Result<UserDetails, SignInError> {
        let response = self
            .post_json(
                "/token/",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await
            .map_err(|err| {
                self.session().discard_tokens();
                SignInError::Api(err)
            })?;

        if !response.status().is_success() {
            self.session().discard_tokens();
            return Err(SignInError::Api(ApiError::Status(response.status())));
        }

        let issued: IssuedTokens = response.json().await.map_err(|err| {
            self.session().discard_tokens();
            SignInError::Api(ApiError::Http(err))
        })?;
        let (Some(access), Some(refresh)) = (issued.access, issued.refresh) else {
            return Err(SignInError::InvalidCredentials);
        };

        self.session().store_tokens(&TokenPair {
            access: access.clone(),
            refresh: Some(refresh),
        });

        // Deliberately not auth_fetch: a failure here must roll back, not
        // trigger the session-expired path.
        let user = self.fetch_user_with_token(&access).await.map_err(|err| {
            tracing::warn!(error = %err, "User fetch after sign-in failed");
            self.session().discard_tokens();
            SignInError::UserFetch
        })?;

        if user.account_type != attempted {
            self.session().discard_tokens();
            return Err(SignInError::WrongAccountType(attempted));
        }

        self.session().set_account_type(attempted);
        self.session().mark_signed_in(remember_me);
        tracing::info!(account_type = %attempted, "Signed in");
        Ok(user)
    }

    /// Sign out.
    ///
    /// Posts the refresh token to `/core/user_signout/` for server-side
    /// invalidation, then clears the local session unconditionally - a
    /// server failure is logged and otherwise ignored, so sign-out always
    /// succeeds locally.
    pub async fn sign_out(&self) {
        let access = self.session().access_token().unwrap_or_default();
        let refresh = self.session().refresh_token();

        let result = self
            .http()
            .post(self.url("/core/user_signout/"))
            .header(header::AUTHORIZATION, format!("Bearer {access}"))
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "Server-side sign-out failed");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Server-side sign-out failed");
            }
            Ok(_) => {}
        }

        self.session().clear();
        tracing::info!("Signed out");
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or any non-2xx status; the
    /// caller surfaces it as the generic sign-up failure notice, never as a
    /// field error.
    pub async fn sign_up(
        &self,
        account_type: AccountType,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignUpOutcome, ApiError> {
        let response = self
            .post_json(
                "/core/user_signup/",
                &serde_json::json!({
                    "user_type": account_type,
                    "first_name": first_name,
                    "last_name": last_name,
                    "email": email,
                    "password": password,
                }),
            )
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        if response.status() == StatusCode::ACCEPTED {
            Ok(SignUpOutcome::ConfirmationEmailSent)
        } else {
            Ok(SignUpOutcome::Registered)
        }
    }

    /// Request a password-reset OTP for `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx status.
    pub async fn send_reset_otp(&self, email: &str) -> Result<(), ApiError> {
        let response = self
            .post_json("/core/generate_otp/", &serde_json::json!({ "email": email }))
            .await?;
        expect_success(&response)
    }

    /// Reset the password using an emailed OTP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx status.
    pub async fn reset_password(
        &self,
        email: &str,
        otp: u16,
        password: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .post_json(
                "/core/reset_password/",
                &serde_json::json!({ "email": email, "otp": otp, "password": password }),
            )
            .await?;
        expect_success(&response)
    }

    /// Submit user feedback (authenticated).
    ///
    /// # Errors
    ///
    /// Returns [`AuthCallError::SessionExpired`] if the session could not be
    /// refreshed, or [`AuthCallError::Api`] on any other failure.
    pub async fn send_feedback(&self, feedback: &str) -> Result<(), AuthCallError> {
        let response = self
            .auth_fetch(
                Method::POST,
                "/core/feedback/",
                Some(&serde_json::json!({ "feedback": feedback })),
            )
            .await?
            .ok_or(AuthCallError::SessionExpired)?;

        expect_success(&response).map_err(AuthCallError::Api)
    }

    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Response, ApiError> {
        Ok(self.http().post(self.url(path)).json(body).send().await?)
    }
}

/// Map a non-2xx response to [`ApiError::Status`].
pub(crate) fn expect_success(response: &Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}
