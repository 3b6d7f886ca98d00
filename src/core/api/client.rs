//! reqwest-backed finance API client.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use super::error::{ApiError, UpstreamError};
use super::request::ApiRequest;
use crate::core::config::ApiConfig;

/// Successful response: parsed payload plus status metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// JSON document, or a JSON string holding the raw text when the
    /// response was not `application/json`.
    pub data: Value,
    pub status: u16,
    pub status_text: String,
}

/// The remote finance API as seen by tools.
///
/// One call is one HTTP round trip; implementations never retry.
#[async_trait]
pub trait FinanceApi: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// HTTPS client for the Budgetsco API.
///
/// The bearer token is fixed at construction.
#[derive(Clone)]
pub struct BudgetscoClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl std::fmt::Debug for BudgetscoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetscoClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl BudgetscoClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("budgetsco-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<reqwest::Url, ApiError> {
        let raw = format!("{}{}", self.base_url, request.path_and_query());
        reqwest::Url::parse(&raw).map_err(|e| ApiError::config(format!("Invalid URL '{}': {}", raw, e)))
    }
}

/// Decode a response body according to its content type.
///
/// JSON bodies that fail to parse are replaced by a fixed message
/// document rather than failing the call.
fn decode_body(content_type: Option<&str>, bytes: &[u8]) -> Value {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if is_json {
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| json!({ "message": "Failed to parse response" }))
    } else {
        match std::str::from_utf8(bytes) {
            Ok(text) => Value::String(text.to_string()),
            Err(_) => json!({ "message": "Failed to parse response" }),
        }
    }
}

#[async_trait]
impl FinanceApi for BudgetscoClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(&request)?;
        debug!("Sending request to {}", url.path());

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::transport("Request timed out")
            } else if e.is_connect() {
                ApiError::transport(format!("Connection failed: {}", e))
            } else {
                ApiError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let data = match response.bytes().await {
            Ok(bytes) => decode_body(content_type.as_deref(), &bytes),
            Err(_) => json!({ "message": "Failed to parse response" }),
        };

        if !status.is_success() {
            warn!("Upstream returned {} for {}", status.as_u16(), request.path);
            return Err(UpstreamError {
                body: data,
                status: status.as_u16(),
                status_text,
            }
            .into());
        }

        debug!("Upstream returned {}", status.as_u16());

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            status_text,
        })
    }
}
