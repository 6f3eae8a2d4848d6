//! REST API adapter for the content backend.
//!
//! The [`ContentApi`] trait is the seam the controller talks through; the
//! [`HttpApi`] implementation issues real requests with `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` keeps transport, status and payload failures apart so they can
//! be logged precisely. The view layer flattens them into one message per
//! action.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{GenerateRequest, GenerateResponse, HealthResponse, HistoryRecord, RecordId};
use crate::config::ClientConfig;

/// Errors produced by backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// The four backend operations the view depends on.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// `POST /generate-content`
    async fn generate_content(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    /// `GET /history`
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError>;

    /// `DELETE /history/{id}`
    async fn delete_record(&self, id: &RecordId) -> Result<(), ApiError>;

    /// `DELETE /history`
    async fn clear_history(&self) -> Result<(), ApiError>;
}

fn health_endpoint(base_url: &str) -> String {
    format!("{base_url}/")
}

fn generate_endpoint(base_url: &str) -> String {
    format!("{base_url}/generate-content")
}

fn history_endpoint(base_url: &str) -> String {
    format!("{base_url}/history")
}

fn history_item_endpoint(base_url: &str, id: &RecordId) -> String {
    format!("{base_url}/history/{id}")
}

/// `reqwest`-backed [`ContentApi`].
#[derive(Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeouts.request {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.timeouts.connect {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the backend liveness endpoint `GET /` and return its message.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an
    /// unexpected body.
    pub async fn ping(&self) -> Result<String, ApiError> {
        let resp = self.send(Method::GET, &health_endpoint(&self.base_url), None).await?;
        let body: HealthResponse = decode_json(resp).await?;
        Ok(body.message)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&GenerateRequest>,
    ) -> Result<reqwest::Response, ApiError> {
        debug!(%method, %url, "backend request");
        let request = self.http.request(method, url);
        let request = match body {
            Some(json) => request.json(json),
            None => request,
        };
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }
        Ok(resp)
    }
}

async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl ContentApi for HttpApi {
    async fn generate_content(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let resp = self
            .send(Method::POST, &generate_endpoint(&self.base_url), Some(request))
            .await?;
        decode_json(resp).await
    }

    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let resp = self.send(Method::GET, &history_endpoint(&self.base_url), None).await?;
        decode_json(resp).await
    }

    async fn delete_record(&self, id: &RecordId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &history_item_endpoint(&self.base_url, id), None)
            .await?;
        Ok(())
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        self.send(Method::DELETE, &history_endpoint(&self.base_url), None).await?;
        Ok(())
    }
}
