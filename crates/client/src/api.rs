//! HTTP client for the search service endpoints.

use crate::types::{SearchOutcome, ServiceStats};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::debug;

/// Errors from a service call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Body(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// The HTTP status code carried by the failure, if one was received.
    ///
    /// Transport failures, timeouts and malformed bodies usually have no
    /// code; callers render those with the "unknown" sentinel.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Body(_) | ApiError::Timeout(_) => None,
        }
    }
}

/// Client-side view of the search service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Liveness probe. Any successful response means alive; the body is
    /// ignored.
    async fn status(&self) -> Result<(), ApiError>;

    /// One-shot database statistics.
    async fn stats(&self) -> Result<ServiceStats, ApiError>;

    /// Dispatch a search for `query`.
    async fn query(&self, query: &str) -> Result<SearchOutcome, ApiError>;
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// reqwest-backed [`ApiClient`].
pub struct HttpApiClient {
    base_url: String,
    timeout_duration: Duration,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// Every call is bounded by `timeout_duration` so a hung request
    /// always resolves as a failure.
    pub fn new(base_url: impl Into<String>, timeout_duration: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_duration,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping timeouts and non-2xx statuses to errors.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = timeout(self.timeout_duration, request.send())
            .await
            .map_err(|_| ApiError::Timeout(self.timeout_duration))??;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn status(&self) -> Result<(), ApiError> {
        self.send(self.client.get(self.url("/status"))).await?;
        debug!("Pinged server, got 200 OK");
        Ok(())
    }

    async fn stats(&self) -> Result<ServiceStats, ApiError> {
        let response = self.send(self.client.get(self.url("/stats"))).await?;
        response
            .json::<ServiceStats>()
            .await
            .map_err(|e| ApiError::Body(e.to_string()))
    }

    async fn query(&self, query: &str) -> Result<SearchOutcome, ApiError> {
        let request = self
            .client
            .post(self.url("/query"))
            .json(&QueryRequest { query });

        let response = self.send(request).await?;
        response
            .json::<SearchOutcome>()
            .await
            .map_err(|e| ApiError::Body(e.to_string()))
    }
}
