//! Session store.
//!
//! Layered over an injected [`SessionStorage`] adapter, this owns every read
//! and write of the persisted session keys: tokens, the signed-in flag,
//! remember-me, and the selected account type. The process is the only
//! writer, and storage operations are synchronous, so no coordination
//! beyond the adapter's own interior mutability is needed.

use std::sync::Arc;

use swapmart_core::{AccountType, TokenPair};

use crate::storage::{SessionStorage, keys};

/// Handle to the persisted session state.
///
/// Cheap to clone; clones share the same underlying storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Create a session store over a storage adapter.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// The selected account type.
    ///
    /// Defaults to [`AccountType::Customer`] and persists the default when
    /// the key is absent or unreadable.
    #[must_use]
    pub fn account_type(&self) -> AccountType {
        if let Some(name) = self.storage.get(keys::USER_TYPE)
            && let Ok(account_type) = AccountType::from_storage_name(&name)
        {
            return account_type;
        }
        self.storage
            .set(keys::USER_TYPE, AccountType::Customer.storage_name());
        AccountType::Customer
    }

    /// Persist the selected account type.
    pub fn set_account_type(&self, account_type: AccountType) {
        self.storage.set(keys::USER_TYPE, account_type.storage_name());
    }

    /// Whether a signed-in session is recorded. Defaults to `false`.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.storage
            .get(keys::IS_SIGNED_IN)
            .is_some_and(|flag| flag == "true")
    }

    /// Whether the session should be restored without prompting.
    ///
    /// Always `true`: the remember-me checkbox never shipped, and existing
    /// behavior treats every user as remembered. The persisted flag is
    /// still written at sign-in for forward compatibility.
    #[must_use]
    pub const fn remember_me(&self) -> bool {
        true
    }

    /// The persisted access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(keys::ACCESS)
    }

    /// The persisted refresh token, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(keys::REFRESH)
    }

    /// Persist a token pair. A missing refresh token (unrotated refresh
    /// response) leaves the existing one in place.
    pub fn store_tokens(&self, tokens: &TokenPair) {
        self.storage.set(keys::ACCESS, &tokens.access);
        if let Some(refresh) = &tokens.refresh {
            self.storage.set(keys::REFRESH, refresh);
        }
    }

    /// Record a successful sign-in.
    pub fn mark_signed_in(&self, remember_me: bool) {
        self.storage.set(keys::IS_SIGNED_IN, "true");
        self.storage
            .set(keys::REMEMBER_ME, if remember_me { "true" } else { "false" });
    }

    /// Re-assert the signed-in flag after a successful session restore.
    pub fn refresh_signed_in_flag(&self) {
        self.storage.set(keys::IS_SIGNED_IN, "true");
    }

    /// Discard freshly issued tokens without touching the rest of the
    /// session. Used when post-authentication verification fails, so no
    /// session trace survives the rollback.
    pub fn discard_tokens(&self) {
        self.storage.remove(keys::ACCESS);
        self.storage.remove(keys::REFRESH);
    }

    /// Remove a stale refresh token left behind without an access token.
    pub fn discard_refresh_token(&self) {
        self.storage.remove(keys::REFRESH);
    }

    /// Clear the session: tokens and the signed-in flag. The account-type
    /// selection survives, matching what the UI shows after sign-out.
    pub fn clear(&self) {
        self.storage.remove(keys::ACCESS);
        self.storage.remove(keys::REFRESH);
        self.storage.remove(keys::IS_SIGNED_IN);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Tokens are deliberately not printed.
        f.debug_struct("SessionStore")
            .field("signed_in", &self.is_signed_in())
            .field("account_type", &self.account_type())
            .finish()
    }
}
