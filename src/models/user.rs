//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date_format;

/// User account as served by `api/user/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Email address (also the login name)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Administrator flag
    pub admin: bool,
    /// Only ever sent to the backend, never echoed back
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(with = "date_format")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "date_format::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Name as shown on the account page: first name, then upper-cased last name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}
