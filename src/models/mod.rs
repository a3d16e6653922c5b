//! Data models
//!
//! This module contains the payloads exchanged with the booking backend:
//! - The authenticated principal returned by login
//! - Sessions (bookable classes) and their create/update input
//! - User accounts and teachers
//! - Login and registration requests

pub mod date_format;

mod auth;
mod principal;
mod session;
mod teacher;
mod user;

pub use auth::{LoginRequest, RegisterRequest};
pub use principal::Principal;
pub use session::{Session, SessionInput};
pub use teacher::Teacher;
pub use user::User;
