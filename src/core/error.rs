//! Error types and handling for the MCP server.
//!
//! A single error type covers startup failures; tool invocation failures
//! live in [`ToolError`](crate::domains::tools::ToolError) and finance API
//! failures in [`ApiError`](crate::core::api::ApiError).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Finance API client errors.
    #[error("API error: {0}")]
    Api(#[from] crate::core::api::ApiError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiError;

    #[test]
    fn test_error_display() {
        let err = Error::config("BUDGETSCO_ACCESS_TOKEN is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: BUDGETSCO_ACCESS_TOKEN is not set"
        );

        let err: Error = ApiError::config("bad base URL").into();
        assert!(matches!(err, Error::Api(_)));
    }
}
