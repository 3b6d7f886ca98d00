//! Finance API error types.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Non-success response from the finance API.
///
/// Displayed as the JSON document `{"body", "status", "statusText"}` so
/// callers see the upstream payload verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamError {
    pub body: Value,
    pub status: u16,
    pub status_text: String,
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{} {}", self.status, self.status_text),
        }
    }
}

impl std::error::Error for UpstreamError {}

/// Errors returned by a [`FinanceApi`](super::FinanceApi) call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a 4xx or 5xx status.
    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The client could not be constructed or the URL was malformed.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
