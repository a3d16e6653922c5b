//! User service
//!
//! - GET    api/user/:id
//! - DELETE api/user/:id

use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use super::{ApiClient, ApiError};
use crate::models::User;

#[async_trait]
pub trait UserApi: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<User, ApiError>;

    /// Delete an account
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct HttpUserApi {
    client: ApiClient,
}

impl HttpUserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn boxed(client: ApiClient) -> Arc<dyn UserApi> {
        Arc::new(Self::new(client))
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        self.client.get_json(&format!("api/user/{}", id)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.send(Method::DELETE, &format!("api/user/{}", id)).await
    }
}
