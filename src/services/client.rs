use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiSettings;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur when talking to the dogs service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("Unauthorized: your session is missing or expired")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Validation(String),
}

/// Shared HTTP client for every dogs service endpoint
///
/// Session auth is an HTTP-only cookie set by `/auth/login`, so the
/// underlying client keeps a cookie store and every request carries it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new client for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        let timeout = settings.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(settings.base_url.clone(), Duration::from_secs(timeout))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path such as `/dogs/search?from=25`
    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        check_status(path, response).await
    }

    pub(crate) async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        check_status(path, response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.get(path).await?;
        decode(path, response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path, Some(body)).await?;
        decode(path, response).await
    }
}

async fn check_status(path: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
    tracing::warn!("{} failed: {} - {}", path, status, body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
        _ => Err(ApiError::Status {
            endpoint: path_only(path).to_string(),
            status,
        }),
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse {} response: {}", path_only(path), e))
    })
}

fn path_only(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}
