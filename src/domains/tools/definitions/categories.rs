//! Category tools.

use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::schemas::{
    CustomCategoryAction, Literal, TransactionTypeInput, parse_custom_category_action,
    parse_transaction_type,
};
use crate::domains::tools::{FinanceTool, ToolError, json_body, validated};

const INVALID_TYPE: &str = "Invalid transaction type";
const INVALID_CUSTOM_CATEGORY: &str = "Invalid custom category input";

fn type_query(arguments: &Value) -> Result<QueryParams, ToolError> {
    let input = validated(parse_transaction_type(arguments), INVALID_TYPE)?;
    let mut query = QueryParams::new();
    query.push("type", input.transaction_type.as_str());
    Ok(query)
}

pub struct GetCategoriesByTypeTool;

impl FinanceTool for GetCategoriesByTypeTool {
    const NAME: &'static str = "getCategoriesByType";
    const TITLE: &'static str = "Get all categories by type.";
    const DESCRIPTION: &'static str = "Retrieve all categories of a specific type. Always use this tool to get categories before creating a transaction. If no categories match, create a new category.";
    const READ_ONLY: bool = true;
    type Params = TransactionTypeInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/categories/get").with_query(type_query(arguments)?))
    }
}

pub struct GetCustomCategoriesTool;

impl FinanceTool for GetCustomCategoriesTool {
    const NAME: &'static str = "getCustomCategories";
    const TITLE: &'static str = "Get all custom categories";
    const DESCRIPTION: &'static str = "Retrieve all custom categories created by the user";
    const READ_ONLY: bool = true;
    type Params = TransactionTypeInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/categories/custom/get").with_query(type_query(arguments)?))
    }
}

pub struct CreateCustomCategoriesTool;

impl FinanceTool for CreateCustomCategoriesTool {
    const NAME: &'static str = "createCustomCategories";
    const TITLE: &'static str = "Create custom categories.";
    const DESCRIPTION: &'static str = "Create new custom categories for transactions.";
    const READ_ONLY: bool = false;
    type Params = CustomCategoryAction;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let input = validated(parse_custom_category_action(arguments), INVALID_CUSTOM_CATEGORY)?;
        Ok(ApiRequest::post("/categories/custom/create", json_body(&input)?))
    }
}

pub struct DeleteCustomCategoriesTool;

impl FinanceTool for DeleteCustomCategoriesTool {
    const NAME: &'static str = "deleteCustomCategories";
    const TITLE: &'static str = "Delete custom categories.";
    const DESCRIPTION: &'static str = "Delete custom categories";
    const READ_ONLY: bool = false;
    type Params = CustomCategoryAction;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let input = validated(parse_custom_category_action(arguments), INVALID_CUSTOM_CATEGORY)?;
        let mut query = QueryParams::new();
        query.extend("category", input.categories);
        query.push("type", input.transaction_type.as_str());
        Ok(ApiRequest::delete("/categories/custom/delete").with_query(query))
    }
}
