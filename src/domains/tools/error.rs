//! Tool-specific error types.

use thiserror::Error;

use crate::core::api::{ApiError, UpstreamError};
use crate::domains::schemas::FieldErrors;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Arguments failed schema validation; no request was sent.
    #[error("{context}: {errors}")]
    Validation {
        context: &'static str,
        errors: FieldErrors,
    },

    /// The finance API answered with a non-success status.
    #[error("{0}")]
    Upstream(UpstreamError),

    /// The finance API could not be reached.
    #[error("Request failed: {0}")]
    Transport(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new validation error.
    pub fn validation(context: &'static str, errors: FieldErrors) -> Self {
        Self::Validation { context, errors }
    }
}

impl From<ApiError> for ToolError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Upstream(upstream) => Self::Upstream(upstream),
            ApiError::Transport(msg) => Self::Transport(msg),
            ApiError::Config(msg) => Self::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
