//! Shared HTTP client
//!
//! Resolves `api/...` paths against the configured base URL and attaches the
//! logged-in principal's bearer token to every request.

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::ApiError;
use crate::config::ApiConfig;
use crate::state::SessionState;

#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
    state: Arc<SessionState>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, state: Arc<SessionState>) -> Result<Self, ApiError> {
        // `Url::join` drops the last segment unless the base ends with a slash.
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("yoga-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base, http, state })
    }

    /// Session state whose principal authenticates the requests
    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(self.request(Method::GET, path)?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::POST, path)?.json(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(self.request(Method::PUT, path)?.json(body)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body, ignoring whatever the backend answers
    pub async fn post_ignore<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path)?.json(body)).await?;
        Ok(())
    }

    /// Send a request without a body, ignoring whatever the backend answers
    pub async fn send(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(method, path)?).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url);
        if let Some(principal) = self.state.principal() {
            builder = builder.bearer_auth(&principal.token);
        }
        Ok(builder)
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("{} answered {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
