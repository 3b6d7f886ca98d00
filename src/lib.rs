//! Budgetsco MCP Server Library
//!
//! Exposes the Budgetsco personal-finance REST API to MCP clients as a set
//! of validated tools: transactions, recurring transactions, categories,
//! budgets and currency preference.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the finance API client, the
//!   MCP server handler and its transports
//! - **domains**: Business logic
//!   - **schemas**: Argument validation into typed inputs
//!   - **tools**: One MCP tool per finance API operation
//!
//! # Example
//!
//! ```rust,no_run
//! use budgetsco_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
