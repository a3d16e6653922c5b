//! ISO-8601 date handling for backend payloads
//!
//! The backend is not consistent about how it writes dates. Three shapes are
//! accepted and all become `DateTime<Utc>`:
//! - RFC 3339 with an offset (`2025-01-01T10:00:00Z`, `2025-01-01T10:00:00+02:00`)
//! - zone-less date-times (`2025-01-01T10:00:00`, `2025-01-01T10:00:00.123`), read as UTC
//! - plain dates (`2025-01-01`), read as midnight UTC
//!
//! Use with `#[serde(with = "date_format")]`, or `date_format::option` for
//! nullable fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Parse any of the accepted ISO-8601 shapes.
pub fn parse_iso8601(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(format!("invalid ISO-8601 date: '{}'", value))
}

/// Serialize as RFC 3339 with millisecond precision and a `Z` suffix.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso8601(&raw).map_err(de::Error::custom)
}

/// Nullable variant, pair with `#[serde(default)]` so absent fields become `None`.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| parse_iso8601(&s).map_err(de::Error::custom))
            .transpose()
    }
}
