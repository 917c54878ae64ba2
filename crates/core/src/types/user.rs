//! Server-sourced user projection.

use serde::{Deserialize, Serialize};

use crate::types::AccountType;

/// The signed-in user's profile as the backend reports it.
///
/// Fetched from `GET /core/current_user/` and replaced wholesale on each
/// successful fetch; never locally authoritative. Field names follow the
/// backend's snake_case wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    /// User's database ID.
    pub id: i64,
    /// Account type (numeric `user_type` on the wire).
    #[serde(rename = "user_type")]
    pub account_type: AccountType,
    /// User's first name.
    pub first_name: String,
    /// User's last name.
    pub last_name: String,
    /// User's email address.
    pub email: String,
    /// Contact phone number, if the user provided one.
    #[serde(rename = "contact_number")]
    pub phone_number: Option<String>,
    /// Mailing address, if the user provided one.
    pub address: Option<String>,
}
