//! Account type enum.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing an [`AccountType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountTypeError {
    /// The numeric code is not a known account type.
    #[error("unknown account type code: {0}")]
    UnknownCode(u64),
    /// The stored name is not a known account type.
    #[error("unknown account type name: {0}")]
    UnknownName(String),
}

/// The kind of account a user holds.
///
/// The backend identifies account types by a numeric `user_type` field
/// (0 = customer, 1 = seller); persisted session storage uses the
/// capitalized name form (`Customer` / `Seller`). Both representations are
/// fixed wire contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountType {
    /// Buys from the store; may browse all listings and check out a cart.
    #[default]
    Customer,
    /// Sells on the store; may manage their own listings.
    Seller,
}

impl AccountType {
    /// Numeric wire code used by the backend's `user_type` field.
    #[must_use]
    pub const fn code(self) -> u64 {
        match self {
            Self::Customer => 0,
            Self::Seller => 1,
        }
    }

    /// Parse the numeric wire code.
    ///
    /// # Errors
    ///
    /// Returns [`AccountTypeError::UnknownCode`] for any code other than 0 or 1.
    pub const fn from_code(code: u64) -> Result<Self, AccountTypeError> {
        match code {
            0 => Ok(Self::Customer),
            1 => Ok(Self::Seller),
            other => Err(AccountTypeError::UnknownCode(other)),
        }
    }

    /// Capitalized name used as the persisted `userType` storage value.
    #[must_use]
    pub const fn storage_name(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Seller => "Seller",
        }
    }

    /// Parse the persisted storage name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountTypeError::UnknownName`] for anything other than
    /// `Customer` or `Seller`.
    pub fn from_storage_name(name: &str) -> Result<Self, AccountTypeError> {
        match name {
            "Customer" => Ok(Self::Customer),
            "Seller" => Ok(Self::Seller),
            other => Err(AccountTypeError::UnknownName(other.to_owned())),
        }
    }

    /// Lowercase label for user-facing messages ("customer" / "seller").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Seller => "seller",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

// The wire form is the numeric code, matching the backend's `user_type`.
impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.code())
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u64::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}
