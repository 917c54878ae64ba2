//! Command implementations and shared plumbing.

pub mod auth;
pub mod listings;

use thiserror::Error;

use swapmart_client::api::ApiClient;
use swapmart_client::config::{ClientConfig, ConfigError};
use swapmart_client::error::{ApiError, AuthCallError, Notice, SignInError};
use swapmart_client::session::SessionStore;
use swapmart_client::storage::{FileStorage, StorageError};
use swapmart_client::validate::FieldResult;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The session file could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The authenticated call failed or the session expired.
    #[error(transparent)]
    Auth(#[from] AuthCallError),

    /// Sign-in was rejected.
    #[error(transparent)]
    SignIn(#[from] SignInError),

    /// A command argument failed validation.
    #[error("{0}")]
    Invalid(&'static str),
}

/// Build an API client from the environment and the file-backed session.
pub fn client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    let storage = FileStorage::open(&config.session_file)?;
    let session = SessionStore::new(storage);

    Ok(ApiClient::new(&config, session).with_session_expired_handler(|| {
        let notice = Notice::SESSION_EXPIRED;
        tracing::warn!("{}: {}", notice.title, notice.message);
    }))
}

/// Unwrap a field validation result, mapping empty input to
/// `empty_message` and rejected input to its validator message.
fn require<T>(result: FieldResult<T>, empty_message: &'static str) -> Result<T, CliError> {
    match result {
        FieldResult::Valid(value) => Ok(value),
        FieldResult::Empty => Err(CliError::Invalid(empty_message)),
        FieldResult::Invalid(message) => Err(CliError::Invalid(message)),
    }
}
