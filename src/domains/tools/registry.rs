//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use crate::core::api::FinanceApi;

use super::definitions::{
    CreateCustomCategoriesTool, CreateRecurringTransactionTool, CreateTransactionTool,
    DeleteCustomCategoriesTool, DeleteRecurringTransactionTool, DeleteTransactionTool,
    EditRecurringTransactionTool, EditTransactionTool, GetBudgetTool, GetCategoriesByTypeTool,
    GetCurrencyTool, GetCustomCategoriesTool, GetRecurringTransactionsTool, GetTransactionsTool,
    MarkRecurringTransactionDoneTool, SetBudgetTool, SetCurrencyTool,
    SkipRecurringTransactionTool,
};
use super::error::ToolError;
use super::handlers::{FinanceTool, call_result, execute};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    api: Arc<dyn FinanceApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(api: Arc<dyn FinanceApi>) -> Self {
        Self { api }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetTransactionsTool::NAME,
            CreateTransactionTool::NAME,
            EditTransactionTool::NAME,
            DeleteTransactionTool::NAME,
            GetRecurringTransactionsTool::NAME,
            CreateRecurringTransactionTool::NAME,
            EditRecurringTransactionTool::NAME,
            MarkRecurringTransactionDoneTool::NAME,
            SkipRecurringTransactionTool::NAME,
            DeleteRecurringTransactionTool::NAME,
            GetCategoriesByTypeTool::NAME,
            GetCustomCategoriesTool::NAME,
            CreateCustomCategoriesTool::NAME,
            DeleteCustomCategoriesTool::NAME,
            GetBudgetTool::NAME,
            SetBudgetTool::NAME,
            GetCurrencyTool::NAME,
            SetCurrencyTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetTransactionsTool::to_tool(),
            CreateTransactionTool::to_tool(),
            EditTransactionTool::to_tool(),
            DeleteTransactionTool::to_tool(),
            GetRecurringTransactionsTool::to_tool(),
            CreateRecurringTransactionTool::to_tool(),
            EditRecurringTransactionTool::to_tool(),
            MarkRecurringTransactionDoneTool::to_tool(),
            SkipRecurringTransactionTool::to_tool(),
            DeleteRecurringTransactionTool::to_tool(),
            GetCategoriesByTypeTool::to_tool(),
            GetCustomCategoriesTool::to_tool(),
            CreateCustomCategoriesTool::to_tool(),
            DeleteCustomCategoriesTool::to_tool(),
            GetBudgetTool::to_tool(),
            SetBudgetTool::to_tool(),
            GetCurrencyTool::to_tool(),
            SetCurrencyTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Only an unknown name is an `Err`; tool failures come back as
    /// error results, the same way the router reports them.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let api = self.api.as_ref();
        let outcome = match name {
            GetTransactionsTool::NAME => execute::<GetTransactionsTool>(api, &arguments).await,
            CreateTransactionTool::NAME => execute::<CreateTransactionTool>(api, &arguments).await,
            EditTransactionTool::NAME => execute::<EditTransactionTool>(api, &arguments).await,
            DeleteTransactionTool::NAME => execute::<DeleteTransactionTool>(api, &arguments).await,
            GetRecurringTransactionsTool::NAME => {
                execute::<GetRecurringTransactionsTool>(api, &arguments).await
            }
            CreateRecurringTransactionTool::NAME => {
                execute::<CreateRecurringTransactionTool>(api, &arguments).await
            }
            EditRecurringTransactionTool::NAME => {
                execute::<EditRecurringTransactionTool>(api, &arguments).await
            }
            MarkRecurringTransactionDoneTool::NAME => {
                execute::<MarkRecurringTransactionDoneTool>(api, &arguments).await
            }
            SkipRecurringTransactionTool::NAME => {
                execute::<SkipRecurringTransactionTool>(api, &arguments).await
            }
            DeleteRecurringTransactionTool::NAME => {
                execute::<DeleteRecurringTransactionTool>(api, &arguments).await
            }
            GetCategoriesByTypeTool::NAME => {
                execute::<GetCategoriesByTypeTool>(api, &arguments).await
            }
            GetCustomCategoriesTool::NAME => {
                execute::<GetCustomCategoriesTool>(api, &arguments).await
            }
            CreateCustomCategoriesTool::NAME => {
                execute::<CreateCustomCategoriesTool>(api, &arguments).await
            }
            DeleteCustomCategoriesTool::NAME => {
                execute::<DeleteCustomCategoriesTool>(api, &arguments).await
            }
            GetBudgetTool::NAME => execute::<GetBudgetTool>(api, &arguments).await,
            SetBudgetTool::NAME => execute::<SetBudgetTool>(api, &arguments).await,
            GetCurrencyTool::NAME => execute::<GetCurrencyTool>(api, &arguments).await,
            SetCurrencyTool::NAME => execute::<SetCurrencyTool>(api, &arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        Ok(call_result(outcome))
    }
}
