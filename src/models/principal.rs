//! Principal model

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `POST api/auth/login`.
///
/// Held in memory only; it disappears on logout or when the process exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Bearer token sent with every authenticated request
    pub token: String,
    /// Token scheme reported by the backend
    #[serde(rename = "type", default)]
    pub token_type: String,
    /// User ID
    pub id: i64,
    /// Login name (the account email)
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Administrator flag
    pub admin: bool,
}

impl Principal {
    /// Check if the principal is an administrator
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Value of the `Authorization` header for this principal
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
