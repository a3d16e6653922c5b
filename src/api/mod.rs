//! API layer - resource services over the booking backend
//!
//! Each resource has a trait (the seam the views depend on) and an HTTP
//! implementation built on the shared [`ApiClient`]:
//! - `AuthApi`: login and registration
//! - `SessionApi`: session CRUD and participation
//! - `TeacherApi`: teacher reference data
//! - `UserApi`: account lookup and deletion
//!
//! The services are stateless. Nothing is retried or cached.

pub mod auth;
pub mod client;
pub mod error;
pub mod sessions;
pub mod teachers;
pub mod users;

#[cfg(test)]
pub(crate) mod test_server;

use std::sync::Arc;

pub use auth::{AuthApi, HttpAuthApi};
pub use client::ApiClient;
pub use error::ApiError;
pub use sessions::{HttpSessionApi, SessionApi};
pub use teachers::{HttpTeacherApi, TeacherApi};
pub use users::{HttpUserApi, UserApi};

/// The resource services a view may need
#[derive(Clone)]
pub struct ApiServices {
    pub auth: Arc<dyn AuthApi>,
    pub sessions: Arc<dyn SessionApi>,
    pub teachers: Arc<dyn TeacherApi>,
    pub users: Arc<dyn UserApi>,
}

impl ApiServices {
    /// HTTP-backed services sharing one client
    pub fn http(client: ApiClient) -> Self {
        Self {
            auth: HttpAuthApi::boxed(client.clone()),
            sessions: HttpSessionApi::boxed(client.clone()),
            teachers: HttpTeacherApi::boxed(client.clone()),
            users: HttpUserApi::boxed(client),
        }
    }
}
