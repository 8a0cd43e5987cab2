// HTTP client wrapper - single point of contact with the sentiment service
//
// Every failure mode is normalized into one error type (`ApiError`) that
// carries only a human-readable message. Callers never discriminate between
// error kinds; they display them. No retries, no local caching, no
// deduplication of in-flight requests.

pub mod models;

use anyhow::{Context, Result};
use models::{AnalysisResult, CacheMetrics, HistoryPage};
use serde::Deserialize;
use std::time::Duration;

/// Fixed message for connectivity failures (request sent, no response)
const UNREACHABLE_MSG: &str = "Unable to reach the server. Please check if the API is running.";

/// Fallback when the server returns an error without a usable detail field
const GENERIC_SERVER_MSG: &str = "An error occurred";

/// Normalized API failure
///
/// Three kinds, one display surface:
/// - `Server`: non-2xx response; message from the body's `detail` field
/// - `Unreachable`: no response arrived (connect failure or timeout)
/// - `Request`: the request failed before or while being sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Server(String),
    Unreachable,
    Request(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Server(msg) => f.write_str(msg),
            ApiError::Unreachable => f.write_str(UNREACHABLE_MSG),
            ApiError::Request(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Structured error body returned by the service on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Extract the user-facing message from an error response body
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| GENERIC_SERVER_MSG.to_string())
}

/// Map a reqwest transport error onto the normalized taxonomy
fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() {
        ApiError::Unreachable
    } else {
        ApiError::Request(err.to_string())
    }
}

/// Request body for POST /analyze
#[derive(serde::Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Client for the sentiment service
///
/// Built once at startup; the underlying reqwest client applies a uniform
/// request timeout to every call.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /analyze - classify a piece of text
    ///
    /// Performs no input validation; that is the caller's responsibility.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
        let response = self
            .http
            .post(self.url("/analyze"))
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::parse_success(response).await
    }

    /// GET /history?limit=N - fetch the most recent records
    ///
    /// Ordering is determined by the server (most-recent-first).
    pub async fn fetch_history(&self, limit: usize) -> Result<HistoryPage, ApiError> {
        let response = self
            .http
            .get(self.url("/history"))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::parse_success(response).await
    }

    /// GET /cache/stats - current cache performance snapshot
    pub async fn fetch_cache_stats(&self) -> Result<CacheMetrics, ApiError> {
        let response = self
            .http
            .get(self.url("/cache/stats"))
            .send()
            .await
            .map_err(map_transport_error)?;

        Self::parse_success(response).await
    }

    /// DELETE /cache/clear - flush the server-side cache
    ///
    /// Part of the API contract; not wired to any key binding in the
    /// current surface.
    #[allow(dead_code)]
    pub async fn clear_cache(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url("/cache/clear"))
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Server(error_message_from_body(&body)))
        }
    }

    /// GET /health - reachability probe
    ///
    /// Never errors: any failure, network or server, collapses to `false`.
    pub async fn check_health(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Decode a 2xx body, or turn a non-2xx response into a server error
    async fn parse_success<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Server error {}: {}", status, body);
            return Err(ApiError::Server(error_message_from_body(&body)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}
