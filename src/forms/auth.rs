//! Login and registration forms

use super::{Form, FormControl, Validator, EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH};
use crate::config::FormConfig;
use crate::models::{LoginRequest, RegisterRequest};

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormControl,
    pub password: FormControl,
}

impl LoginForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            email: FormControl::new(vec![Validator::Required, Validator::Email]),
            password: FormControl::new(vec![
                Validator::Required,
                Validator::MinLength(config.password_min_length),
            ]),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set_value(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_value(value);
    }

    /// Request body, only when the form is valid
    pub fn to_request(&self) -> Option<LoginRequest> {
        self.is_valid()
            .then(|| LoginRequest::new(self.email.value(), self.password.value()))
    }
}

impl Form for LoginForm {
    fn controls(&self) -> Vec<(&'static str, &FormControl)> {
        vec![("email", &self.email), ("password", &self.password)]
    }
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub email: FormControl,
    pub first_name: FormControl,
    pub last_name: FormControl,
    pub password: FormControl,
}

impl RegisterForm {
    pub fn new(config: &FormConfig) -> Self {
        let name = || {
            FormControl::new(vec![
                Validator::Required,
                Validator::MinLength(config.name_min_length),
                Validator::MaxLength(NAME_MAX_LENGTH),
            ])
        };

        Self {
            email: FormControl::new(vec![
                Validator::Required,
                Validator::Email,
                Validator::MaxLength(EMAIL_MAX_LENGTH),
            ]),
            first_name: name(),
            last_name: name(),
            password: FormControl::new(vec![
                Validator::Required,
                Validator::MinLength(config.password_min_length),
                Validator::MaxLength(PASSWORD_MAX_LENGTH),
            ]),
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set_value(value);
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name.set_value(value);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name.set_value(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_value(value);
    }

    /// Request body, only when the form is valid
    pub fn to_request(&self) -> Option<RegisterRequest> {
        self.is_valid().then(|| RegisterRequest {
            email: self.email.value().to_string(),
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            password: self.password.value().to_string(),
        })
    }
}

impl Form for RegisterForm {
    fn controls(&self) -> Vec<(&'static str, &FormControl)> {
        vec![
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ]
    }
}
