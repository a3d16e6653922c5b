//! Teacher model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::date_format;

/// Teacher reference data (read-only on the client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, with = "date_format::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "date_format::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Teacher {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
