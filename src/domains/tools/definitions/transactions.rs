//! Transaction tools: list, create, edit and delete.

use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::schemas::{
    Literal, TransactionDeleteInput, TransactionFilter, TransactionInput,
    parse_transaction_delete_input, parse_transaction_filter, parse_transaction_input,
};
use crate::domains::tools::{FinanceTool, ToolError, json_body, validated};

pub struct GetTransactionsTool;

impl FinanceTool for GetTransactionsTool {
    const NAME: &'static str = "getTransactions";
    const TITLE: &'static str = "Get Transactions";
    const DESCRIPTION: &'static str = "Retrieve a list of transactions";
    const READ_ONLY: bool = true;
    type Params = TransactionFilter;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let filter = validated(parse_transaction_filter(arguments), "Invalid filter")?;
        Ok(ApiRequest::get("/transactions/get").with_query(filter_query(&filter)))
    }
}

/// List fields repeat under their singular key; absent fields are left out.
fn filter_query(filter: &TransactionFilter) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(categories) = &filter.categories {
        query.extend("category", categories.iter().map(String::as_str));
    }
    if let Some(types) = &filter.types {
        query.extend("type", types.iter().map(Literal::as_str));
    }
    query.push_opt("paymentMode", filter.payment_modes.map(|mode| mode.as_str()));
    query.push("startDate", filter.start_date.as_str());
    query.push_opt("endDate", filter.end_date.as_deref());
    query
}

fn transaction_request(path: &str, arguments: &Value) -> Result<ApiRequest, ToolError> {
    let input: TransactionInput = validated(parse_transaction_input(arguments), "Invalid input")?;
    Ok(ApiRequest::post(path, json_body(&input)?))
}

pub struct CreateTransactionTool;

impl FinanceTool for CreateTransactionTool {
    const NAME: &'static str = "createTransaction";
    const TITLE: &'static str = "Create new transaction";
    const DESCRIPTION: &'static str = "Create new transaction.";
    const READ_ONLY: bool = false;
    type Params = TransactionInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        transaction_request("/transactions/create", arguments)
    }
}

pub struct EditTransactionTool;

impl FinanceTool for EditTransactionTool {
    const NAME: &'static str = "editTransaction";
    const TITLE: &'static str = "Edit transaction";
    const DESCRIPTION: &'static str = "Edit an existing transaction.";
    const READ_ONLY: bool = false;
    type Params = TransactionInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        transaction_request("/transactions/edit", arguments)
    }
}

pub struct DeleteTransactionTool;

impl FinanceTool for DeleteTransactionTool {
    const NAME: &'static str = "deleteTransaction";
    const TITLE: &'static str = "Delete transaction";
    const DESCRIPTION: &'static str = "Delete transaction permanently.";
    const READ_ONLY: bool = false;
    type Params = TransactionDeleteInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let input = validated(parse_transaction_delete_input(arguments), "Invalid transaction")?;
        let mut query = QueryParams::new();
        query.push("transactionId", input.transaction_id);
        Ok(ApiRequest::delete("/transactions/delete").with_query(query))
    }
}
