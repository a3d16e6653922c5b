//! Session model
//!
//! A session is a bookable class: a name, a date, a teacher and the set of
//! users participating in it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::date_format;

/// Session entity as served by `api/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique identifier
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Day the session takes place
    #[serde(with = "date_format")]
    pub date: DateTime<Utc>,
    /// Teacher giving the session
    #[serde(rename = "teacher_id")]
    pub teacher_id: i64,
    /// IDs of participating users
    #[serde(default)]
    pub users: BTreeSet<i64>,
    #[serde(default, with = "date_format::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "date_format::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check if the given user participates in this session
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }

    /// Number of participants
    pub fn participant_count(&self) -> usize {
        self.users.len()
    }
}

/// Body of `POST api/session` and `PUT api/session/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    pub name: String,
    /// Sent as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub teacher_id: i64,
    pub description: String,
}
