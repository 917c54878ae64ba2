//! Session storage adapter.
//!
//! Persisted session state (tokens, flags, account type) lives behind the
//! [`SessionStorage`] trait so the session layer never touches a concrete
//! store directly: the CLI injects a JSON-file store, tests inject an
//! in-memory one. The API mirrors browser local storage: string keys,
//! string values, infallible reads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Fixed storage key names.
///
/// These are a persistence contract shared with earlier releases; renaming
/// any of them orphans existing sessions.
pub mod keys {
    /// Short-lived bearer access token.
    pub const ACCESS: &str = "access";

    /// Long-lived refresh token.
    pub const REFRESH: &str = "refresh";

    /// Signed-in flag (`"true"` / `"false"`).
    pub const IS_SIGNED_IN: &str = "isSignedIn";

    /// Remember-me flag recorded at sign-in.
    pub const REMEMBER_ME: &str = "rememberMe";

    /// Selected account type (`"Customer"` / `"Seller"`).
    pub const USER_TYPE: &str = "userType";
}

/// Errors that can occur when opening a file-backed store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or creating the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The backing file holds something other than a string map.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Key-value storage for session state.
///
/// Implementations use interior mutability; `get`/`set`/`remove` are
/// synchronous and never fail from the caller's point of view (a
/// file-backed store logs write failures and keeps the in-memory view).
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any existing one.
    fn set(&self, key: &str, value: &str);

    /// Remove a value if present.
    fn remove(&self, key: &str);
}

/// In-memory storage; session state vanishes when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .map_or(None, |values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// JSON-file-backed storage so sessions survive process restarts.
///
/// The whole map is rewritten on every mutation; session state is a handful
/// of short strings, so this stays cheap.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) a file-backed store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read or
    /// does not hold a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(values) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize session storage");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, serialized) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "Failed to write session storage"
            );
        }
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .map_or(None, |values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
            self.persist(&values);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            if values.remove(key).is_some() {
                self.persist(&values);
            }
        }
    }
}
