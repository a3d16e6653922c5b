//! Teacher service
//!
//! - GET api/teacher
//! - GET api/teacher/:id

use async_trait::async_trait;
use std::sync::Arc;

use super::{ApiClient, ApiError};
use crate::models::Teacher;

#[async_trait]
pub trait TeacherApi: Send + Sync {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError>;

    async fn detail(&self, id: i64) -> Result<Teacher, ApiError>;
}

pub struct HttpTeacherApi {
    client: ApiClient,
}

impl HttpTeacherApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn boxed(client: ApiClient) -> Arc<dyn TeacherApi> {
        Arc::new(Self::new(client))
    }
}

#[async_trait]
impl TeacherApi for HttpTeacherApi {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.get_json("api/teacher").await
    }

    async fn detail(&self, id: i64) -> Result<Teacher, ApiError> {
        self.client.get_json(&format!("api/teacher/{}", id)).await
    }
}
