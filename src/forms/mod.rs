//! Validated forms
//!
//! A form is a fixed set of named [`FormControl`]s. The submit control of a
//! view is enabled exactly when every control of its form is valid.

pub mod validators;

mod auth;
mod session;

use std::collections::BTreeMap;

pub use auth::{LoginForm, RegisterForm};
pub use session::SessionForm;
pub use validators::{FieldError, Validator};

/// Maximum lengths enforced by the registration form
pub const EMAIL_MAX_LENGTH: usize = 50;
pub const NAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MAX_LENGTH: usize = 40;
/// Maximum length of a session description
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// One input field and its validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    value: String,
    validators: Vec<Validator>,
}

impl FormControl {
    /// Empty control
    pub fn new(validators: Vec<Validator>) -> Self {
        Self {
            value: String::new(),
            validators,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Every error the current value produces, in validator order
    pub fn errors(&self) -> Vec<FieldError> {
        self.validators
            .iter()
            .filter_map(|v| v.check(&self.value))
            .collect()
    }

    /// The error with the given key, if present
    pub fn error(&self, key: &str) -> Option<FieldError> {
        self.errors().into_iter().find(|e| e.key() == key)
    }

    pub fn is_valid(&self) -> bool {
        self.validators.iter().all(|v| v.check(&self.value).is_none())
    }
}

/// Common behaviour of the forms
pub trait Form {
    /// Named controls, in display order
    fn controls(&self) -> Vec<(&'static str, &FormControl)>;

    fn is_valid(&self) -> bool {
        self.controls().iter().all(|(_, c)| c.is_valid())
    }

    /// Whether the submit control is enabled
    fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    /// Errors of the invalid controls, by field name
    fn errors(&self) -> BTreeMap<&'static str, Vec<FieldError>> {
        self.controls()
            .into_iter()
            .map(|(name, control)| (name, control.errors()))
            .filter(|(_, errors)| !errors.is_empty())
            .collect()
    }
}
