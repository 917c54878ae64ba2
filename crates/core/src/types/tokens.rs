//! Access/refresh token pair.

use serde::{Deserialize, Serialize};

/// Token pair issued by `POST /token/` and rotated by `POST /token/refresh/`.
///
/// The access token is short-lived and sent as a bearer credential on every
/// authenticated call; the refresh token mints a replacement access token
/// once the old one expires. The refresh endpoint may omit the `refresh`
/// field when it does not rotate the refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token.
    pub access: String,
    /// Long-lived refresh token, when issued or rotated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}
