//! Error taxonomy for the client.
//!
//! Four tiers, per the UI contract:
//!
//! 1. Field errors - produced by [`crate::validate`], never thrown.
//! 2. Form-level errors - [`crate::validate::forms::FormCheck`], block the
//!    network call.
//! 3. Network/auth errors - [`ApiError`], surfaced to the user only as a
//!    fixed [`Notice`] per action, never as raw server text.
//! 4. Session expiry - [`AuthCallError::SessionExpired`], a distinct notice
//!    raised only by the 401-after-failed-refresh path.

use thiserror::Error;

use swapmart_core::AccountType;

/// Errors from talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from authenticated operations.
#[derive(Debug, Error)]
pub enum AuthCallError {
    /// The access token was rejected and could not be refreshed; the
    /// session has been cleared.
    #[error("session expired")]
    SessionExpired,

    /// The call failed for a non-session reason.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors from the sign-in flow.
///
/// Variants map onto the two surfaces the sign-in form has: field errors
/// under the email/password inputs, and the modal notice.
#[derive(Debug, Error)]
pub enum SignInError {
    /// The backend rejected the credentials.
    #[error("incorrect email address or password")]
    InvalidCredentials,

    /// Authentication succeeded but the account is of the other type; the
    /// issued tokens have been rolled back.
    #[error("not a valid {} account", .0.label())]
    WrongAccountType(AccountType),

    /// Tokens were issued but the user record could not be fetched; the
    /// tokens have been rolled back.
    #[error("could not retrieve user data")]
    UserFetch,

    /// The token request itself failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SignInError {
    /// Error message for the email field, if this error surfaces there.
    #[must_use]
    pub fn email_error(&self) -> Option<String> {
        match self {
            Self::InvalidCredentials => Some("Incorrect email address or password".to_owned()),
            Self::WrongAccountType(attempted) => {
                Some(format!("This is not a valid {} account", attempted.label()))
            }
            Self::UserFetch | Self::Api(_) => None,
        }
    }

    /// Error message for the password field, if this error surfaces there.
    #[must_use]
    pub fn password_error(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCredentials => Some("Incorrect email address or password"),
            Self::WrongAccountType(_) | Self::UserFetch | Self::Api(_) => None,
        }
    }

    /// The modal notice for this error, when it is not a field error.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::InvalidCredentials | Self::WrongAccountType(_) => None,
            Self::UserFetch => Some(Notice::SIGN_IN_NO_USER),
            Self::Api(_) => Some(Notice::SIGN_IN_FAILED),
        }
    }
}

/// A fixed title/message pair shown in the UI's modal dialog.
///
/// Notices are constants: raw server error text never reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
}

impl Notice {
    pub const SIGN_IN_FAILED: Self = Self {
        title: "Sign In Failed",
        message: "Please try again.",
    };
    pub const SIGN_IN_NO_USER: Self = Self {
        title: "Sign In Failed",
        message: "Could not retrieve user data.",
    };
    pub const SIGN_UP_OK: Self = Self {
        title: "Sign Up Successful",
        message: "Please sign in.",
    };
    pub const SIGN_UP_PENDING: Self = Self {
        title: "Sign Up Successful",
        message: "We have sent you a confirmation email to complete registration.",
    };
    pub const SIGN_UP_FAILED: Self = Self {
        title: "Sign Up Failed",
        message: "Please try again.",
    };
    pub const OTP_SENT: Self = Self {
        title: "OTP Sent",
        message: "Please check your email.",
    };
    pub const OTP_FAILED: Self = Self {
        title: "Failed to Send OTP",
        message: "Please try again.",
    };
    pub const RESET_OK: Self = Self {
        title: "Password Reset Successful",
        message: "Please sign in.",
    };
    pub const RESET_FAILED: Self = Self {
        title: "Failed to Reset Password",
        message: "Please try again.",
    };
    pub const FEEDBACK_OK: Self = Self {
        title: "Feedback Sent",
        message: "Thank you for your feedback.",
    };
    pub const FEEDBACK_FAILED: Self = Self {
        title: "Failed to Send Feedback",
        message: "Please try again.",
    };
    pub const ORDER_OK: Self = Self {
        title: "Order Placed",
        message: "Your order has been placed successfully.",
    };
    pub const ORDER_FAILED: Self = Self {
        title: "Failed to Place Order",
        message: "Please try again.",
    };
    pub const LISTING_CREATED: Self = Self {
        title: "Product Added",
        message: "Product has been successfully added!",
    };
    pub const LISTING_CREATE_FAILED: Self = Self {
        title: "Failed to Add Product",
        message: "Please try again.",
    };
    pub const LISTING_DELETED: Self = Self {
        title: "Listing Deleted",
        message: "Your listing has been deleted successfully.",
    };
    pub const LISTING_DELETE_FAILED: Self = Self {
        title: "Failed to Delete Listing",
        message: "Please try again.",
    };
    pub const SESSION_EXPIRED: Self = Self {
        title: "Session Expired",
        message: "You have been signed out automatically since your session has expired.",
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_hits_both_fields() {
        let err = SignInError::InvalidCredentials;
        assert_eq!(
            err.email_error().as_deref(),
            Some("Incorrect email address or password")
        );
        assert_eq!(
            err.password_error(),
            Some("Incorrect email address or password")
        );
        assert!(err.notice().is_none());
    }

    #[test]
    fn test_wrong_account_type_is_email_field_only() {
        let err = SignInError::WrongAccountType(AccountType::Customer);
        assert_eq!(
            err.email_error().as_deref(),
            Some("This is not a valid customer account")
        );
        assert!(err.password_error().is_none());
        assert!(err.notice().is_none());

        let err = SignInError::WrongAccountType(AccountType::Seller);
        assert_eq!(
            err.email_error().as_deref(),
            Some("This is not a valid seller account")
        );
    }

    #[test]
    fn test_user_fetch_is_a_notice() {
        let err = SignInError::UserFetch;
        assert!(err.email_error().is_none());
        assert_eq!(err.notice(), Some(Notice::SIGN_IN_NO_USER));
    }
}
