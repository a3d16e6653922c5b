//! Session service
//!
//! - GET    api/session
//! - GET    api/session/:id
//! - POST   api/session
//! - PUT    api/session/:id
//! - DELETE api/session/:id
//! - POST   api/session/:id/participate/:userId
//! - DELETE api/session/:id/participate/:userId

use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

use super::{ApiClient, ApiError};
use crate::models::{Session, SessionInput};

#[async_trait]
pub trait SessionApi: Send + Sync {
    /// All sessions
    async fn all(&self) -> Result<Vec<Session>, ApiError>;

    /// One session by ID
    async fn detail(&self, id: i64) -> Result<Session, ApiError>;

    async fn create(&self, input: &SessionInput) -> Result<Session, ApiError>;

    async fn update(&self, id: i64, input: &SessionInput) -> Result<Session, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Add a user to the session roster
    async fn participate(&self, id: i64, user_id: i64) -> Result<(), ApiError>;

    /// Remove a user from the session roster
    async fn unparticipate(&self, id: i64, user_id: i64) -> Result<(), ApiError>;
}

pub struct HttpSessionApi {
    client: ApiClient,
}

impl HttpSessionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a boxed service for use with dependency injection
    pub fn boxed(client: ApiClient) -> Arc<dyn SessionApi> {
        Arc::new(Self::new(client))
    }
}

const PATH: &str = "api/session";

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn all(&self) -> Result<Vec<Session>, ApiError> {
        self.client.get_json(PATH).await
    }

    async fn detail(&self, id: i64) -> Result<Session, ApiError> {
        self.client.get_json(&format!("{}/{}", PATH, id)).await
    }

    async fn create(&self, input: &SessionInput) -> Result<Session, ApiError> {
        self.client.post_json(PATH, input).await
    }

    async fn update(&self, id: i64, input: &SessionInput) -> Result<Session, ApiError> {
        self.client.put_json(&format!("{}/{}", PATH, id), input).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.send(Method::DELETE, &format!("{}/{}", PATH, id)).await
    }

    async fn participate(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        self.client
            .send(Method::POST, &format!("{}/{}/participate/{}", PATH, id, user_id))
            .await
    }

    async fn unparticipate(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        self.client
            .send(Method::DELETE, &format!("{}/{}/participate/{}", PATH, id, user_id))
            .await
    }
}
