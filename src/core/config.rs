//! Configuration management for the MCP server.
//!
//! Configuration is populated from defaults and environment variables
//! (optionally via a `.env` file). The finance API access token is the one
//! required setting; loading fails without it.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Base URL of the Budgetsco REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://budgetsco.fly.dev/api";

/// Environment variable holding the personal access token.
pub const ACCESS_TOKEN_VAR: &str = "BUDGETSCO_ACCESS_TOKEN";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Finance API endpoint and credentials.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Finance API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL; tool paths are appended to it.
    pub base_url: String,

    /// Static bearer token sent with every request.
    pub access_token: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            access_token: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Budgetsco MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Fails when `BUDGETSCO_ACCESS_TOKEN` is missing or blank.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.api.access_token = match std::env::var(ACCESS_TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => token,
            _ => {
                return Err(Error::config(format!(
                    "{} environment variable is not set. \
                     Please set it to your Budgetsco personal access token.",
                    ACCESS_TOKEN_VAR
                )));
            }
        };
        Ok(config)
    }

    /// Configuration with an explicit token, for embedding and tests.
    pub fn with_access_token(token: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.api.access_token = token.into();
        config
    }
}

// Serialises tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
