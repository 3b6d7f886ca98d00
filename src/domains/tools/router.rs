//! Tool Router - builds the rmcp ToolRouter.
//!
//! Every tool shares the same finance API handle; each route validates,
//! sends and reports on its own.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::api::FinanceApi;

use super::create_route;
use super::definitions::{
    CreateCustomCategoriesTool, CreateRecurringTransactionTool, CreateTransactionTool,
    DeleteCustomCategoriesTool, DeleteRecurringTransactionTool, DeleteTransactionTool,
    EditRecurringTransactionTool, EditTransactionTool, GetBudgetTool, GetCategoriesByTypeTool,
    GetCurrencyTool, GetCustomCategoriesTool, GetRecurringTransactionsTool, GetTransactionsTool,
    MarkRecurringTransactionDoneTool, SetBudgetTool, SetCurrencyTool,
    SkipRecurringTransactionTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<dyn FinanceApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<GetTransactionsTool, S>(api.clone()))
        .with_route(create_route::<CreateTransactionTool, S>(api.clone()))
        .with_route(create_route::<EditTransactionTool, S>(api.clone()))
        .with_route(create_route::<DeleteTransactionTool, S>(api.clone()))
        .with_route(create_route::<GetRecurringTransactionsTool, S>(api.clone()))
        .with_route(create_route::<CreateRecurringTransactionTool, S>(api.clone()))
        .with_route(create_route::<EditRecurringTransactionTool, S>(api.clone()))
        .with_route(create_route::<MarkRecurringTransactionDoneTool, S>(api.clone()))
        .with_route(create_route::<SkipRecurringTransactionTool, S>(api.clone()))
        .with_route(create_route::<DeleteRecurringTransactionTool, S>(api.clone()))
        .with_route(create_route::<GetCategoriesByTypeTool, S>(api.clone()))
        .with_route(create_route::<GetCustomCategoriesTool, S>(api.clone()))
        .with_route(create_route::<CreateCustomCategoriesTool, S>(api.clone()))
        .with_route(create_route::<DeleteCustomCategoriesTool, S>(api.clone()))
        .with_route(create_route::<GetBudgetTool, S>(api.clone()))
        .with_route(create_route::<SetBudgetTool, S>(api.clone()))
        .with_route(create_route::<GetCurrencyTool, S>(api.clone()))
        .with_route(create_route::<SetCurrencyTool, S>(api))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::super::testing::RecordingApi;
    use super::*;
    use serde_json::json;

    struct TestServer {}

    fn test_api() -> Arc<dyn FinanceApi> {
        Arc::new(RecordingApi::ok(json!(null)))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let tools = router.list_all();
        assert_eq!(tools.len(), 18);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"getTransactions"));
        assert!(names.contains(&"deleteRecurringTransaction"));
        assert!(names.contains(&"deleteCustomCategories"));
        assert!(names.contains(&"setBudget"));
        assert!(names.contains(&"getCurrency"));
    }

    #[test]
    fn test_every_tool_is_closed_world() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        for tool in router.list_all() {
            let annotations = tool.annotations.as_ref().unwrap();
            assert_eq!(annotations.open_world_hint, Some(false), "{}", tool.name);
            assert!(annotations.title.is_some(), "{}", tool.name);
        }
    }

    #[test]
    fn test_read_only_hints() {
        let router: ToolRouter<TestServer> = build_tool_router(test_api());
        let mut read_only: Vec<_> = router
            .list_all()
            .into_iter()
            .filter(|t| t.annotations.as_ref().and_then(|a| a.read_only_hint) == Some(true))
            .map(|t| t.name.to_string())
            .collect();
        read_only.sort();
        assert_eq!(
            read_only,
            vec![
                "getBudget",
                "getCategoriesByType",
                "getCurrency",
                "getCustomCategories",
                "getRecurringTransactions",
                "getTransactions",
            ]
        );
    }

    #[test]
    fn test_registry_matches_router() {
        let api = test_api();
        let registry = ToolRegistry::new(api.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(api);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
