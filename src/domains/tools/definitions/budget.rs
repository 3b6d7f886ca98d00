//! Budget tools.

use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::schemas::{BudgetFilter, BudgetInput, parse_budget_filter, parse_budget_input};
use crate::domains::tools::{FinanceTool, ToolError, json_body, validated};

pub struct GetBudgetTool;

impl FinanceTool for GetBudgetTool {
    const NAME: &'static str = "getBudget";
    const TITLE: &'static str = "Get Budget";
    const DESCRIPTION: &'static str = "Retrieve budget for a specific period";
    const READ_ONLY: bool = true;
    type Params = BudgetFilter;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let filter = validated(parse_budget_filter(arguments), "Invalid filter")?;
        let mut query = QueryParams::new();
        query.push("startMonth", filter.start_month);
        query.push_opt("endMonth", filter.end_month);
        query.push("breakDownByCategory", filter.break_down_by_category.to_string());
        Ok(ApiRequest::get("/target/get").with_query(query))
    }
}

pub struct SetBudgetTool;

impl FinanceTool for SetBudgetTool {
    const NAME: &'static str = "setBudget";
    const TITLE: &'static str = "Set Budget";
    const DESCRIPTION: &'static str = "Set budget for categories";
    const READ_ONLY: bool = false;
    type Params = BudgetInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let budget = validated(parse_budget_input(arguments), "Invalid input")?;
        Ok(ApiRequest::post("/target/set", json_body(&budget)?))
    }
}
