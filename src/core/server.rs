//! MCP Server implementation and lifecycle management.
//!
//! The server exposes the Budgetsco tools only. Tool routes are built in
//! `domains/tools/router.rs` and share a single finance API client, which
//! carries the access token for the lifetime of the process.

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::api::{BudgetscoClient, FinanceApi};
use super::config::Config;
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// Instructions sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Budgetsco personal finance tools. \
Use getCategoriesByType before creating a transaction and pick one of the returned categories. \
Dates are YYYY-MM-DD, budget months are YYYY-MM and amounts are decimal numbers or strings.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Finance API shared by every tool.
    api: Arc<dyn FinanceApi>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by the Budgetsco REST API.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let api = Arc::new(BudgetscoClient::new(&config.api)?);
        Ok(Self::with_api(config, api))
    }

    /// Create a server on top of an existing finance API implementation.
    pub fn with_api(config: Config, api: Arc<dyn FinanceApi>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(api.clone()),
            config: Arc::new(config),
            api,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let registry = ToolRegistry::new(self.api.clone());
        registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::testing::RecordingApi;
    use serde_json::json;

    fn test_server(api: Arc<RecordingApi>) -> McpServer {
        McpServer::with_api(Config::with_access_token("test-token"), api)
    }

    #[test]
    fn test_new_builds_client_from_config() {
        let server = McpServer::new(Config::with_access_token("test-token")).unwrap();
        assert_eq!(server.name(), "Budgetsco MCP Server");
        assert_eq!(server.list_tools().len(), 18);
    }

    #[test]
    fn test_info_advertises_tools_only() {
        let server = test_server(Arc::new(RecordingApi::ok(json!(null))));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "Budgetsco MCP Server");
    }

    #[test]
    fn test_list_tools_shape() {
        let server = test_server(Arc::new(RecordingApi::ok(json!(null))));
        let tools = server.list_tools();
        let get_budget = tools
            .iter()
            .find(|t| t["name"] == "getBudget")
            .unwrap();
        assert_eq!(get_budget["annotations"]["readOnlyHint"], true);
        assert_eq!(get_budget["annotations"]["openWorldHint"], false);
        assert!(get_budget["inputSchema"]["properties"]["startMonth"].is_object());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_uses_shared_api() {
        let api = Arc::new(RecordingApi::ok(json!({ "currency": "INR" })));
        let server = test_server(api.clone());

        let result = server.call_tool("getCurrency", json!({})).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(api.requests().len(), 1);
    }
}
