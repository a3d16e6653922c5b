//! Field validators
//!
//! Only `Required` rejects an empty value; the other validators skip empty
//! input so a blank field reports a single `required` error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Basic `local@domain` shape, the domain being dot-separated labels.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A rule applied to a single form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    /// Calendar date written `YYYY-MM-DD`
    Date,
    /// Positive integer identifier
    Id,
}

/// A failed validation, keyed like the form error it renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { allowed: usize, actual: usize },
    Email,
    Date,
    Id,
}

impl FieldError {
    /// Error key: `required`, `minlength`, `maxlength`, `email`, `date` or `id`
    pub fn key(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::MinLength { .. } => "minlength",
            FieldError::MaxLength { .. } => "maxlength",
            FieldError::Email => "email",
            FieldError::Date => "date",
            FieldError::Id => "id",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required"),
            FieldError::MinLength { required, .. } => {
                write!(f, "Must be at least {} characters", required)
            }
            FieldError::MaxLength { allowed, .. } => {
                write!(f, "Must be at most {} characters", allowed)
            }
            FieldError::Email => write!(f, "Not a valid email address"),
            FieldError::Date => write!(f, "Not a valid date"),
            FieldError::Id => write!(f, "Not a valid selection"),
        }
    }
}

impl Validator {
    /// Check a value, returning the error it produces if any
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if value.is_empty() {
            return match self {
                Validator::Required => Some(FieldError::Required),
                _ => None,
            };
        }

        let length = value.chars().count();
        match *self {
            Validator::Required => None,
            Validator::MinLength(required) if length < required => {
                Some(FieldError::MinLength { required, actual: length })
            }
            Validator::MaxLength(allowed) if length > allowed => {
                Some(FieldError::MaxLength { allowed, actual: length })
            }
            Validator::Email if !is_email(value) => Some(FieldError::Email),
            Validator::Date if parse_date(value).is_none() => Some(FieldError::Date),
            Validator::Id if parse_id(value).is_none() => Some(FieldError::Id),
            _ => None,
        }
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
