//! Authentication service
//!
//! - POST api/auth/login - exchange credentials for a principal
//! - POST api/auth/register - create an account

use async_trait::async_trait;
use std::sync::Arc;

use super::{ApiClient, ApiError};
use crate::models::{LoginRequest, Principal, RegisterRequest};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in; the returned principal is not stored anywhere by this call
    async fn login(&self, request: &LoginRequest) -> Result<Principal, ApiError>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a boxed service for use with dependency injection
    pub fn boxed(client: ApiClient) -> Arc<dyn AuthApi> {
        Arc::new(Self::new(client))
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<Principal, ApiError> {
        self.client.post_json("api/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.client.post_ignore("api/auth/register", request).await
    }
}
