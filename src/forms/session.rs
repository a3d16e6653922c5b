//! Session create/update form

use super::validators::{parse_date, parse_id};
use super::{Form, FormControl, Validator, DESCRIPTION_MAX_LENGTH};
use crate::models::{Session, SessionInput};

#[derive(Debug, Clone)]
pub struct SessionForm {
    pub name: FormControl,
    /// `YYYY-MM-DD`
    pub date: FormControl,
    pub teacher_id: FormControl,
    pub description: FormControl,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl SessionForm {
    /// Blank form, as shown when creating a session
    pub fn empty() -> Self {
        Self {
            name: FormControl::new(vec![Validator::Required]),
            date: FormControl::new(vec![Validator::Required, Validator::Date]),
            teacher_id: FormControl::new(vec![Validator::Required, Validator::Id]),
            description: FormControl::new(vec![
                Validator::Required,
                Validator::MaxLength(DESCRIPTION_MAX_LENGTH),
            ]),
        }
    }

    /// Form pre-filled from an existing session, as shown when updating it
    pub fn from_session(session: &Session) -> Self {
        let mut form = Self::empty();
        form.name.set_value(session.name.as_str());
        form.date.set_value(session.date.date_naive().format("%Y-%m-%d").to_string());
        form.teacher_id.set_value(session.teacher_id.to_string());
        form.description.set_value(session.description.as_str());
        form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name.set_value(value);
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date.set_value(value);
    }

    pub fn set_teacher_id(&mut self, teacher_id: i64) {
        self.teacher_id.set_value(teacher_id.to_string());
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description.set_value(value);
    }

    /// Request body, only when the form is valid
    pub fn to_input(&self) -> Option<SessionInput> {
        if !self.is_valid() {
            return None;
        }

        Some(SessionInput {
            name: self.name.value().to_string(),
            date: parse_date(self.date.value())?,
            teacher_id: parse_id(self.teacher_id.value())?,
            description: self.description.value().to_string(),
        })
    }
}

impl Form for SessionForm {
    fn controls(&self) -> Vec<(&'static str, &FormControl)> {
        vec![
            ("name", &self.name),
            ("date", &self.date),
            ("teacher_id", &self.teacher_id),
            ("description", &self.description),
        ]
    }
}
