//! Recurring transaction tools.

use serde_json::Value;

use crate::core::api::{ApiRequest, QueryParams};
use crate::domains::schemas::{
    RecurringTransactionAction, RecurringTransactionFilter, RecurringTransactionInput,
    parse_recurring_transaction_action, parse_recurring_transaction_filter,
    parse_recurring_transaction_input,
};
use crate::domains::tools::{FinanceTool, ToolError, json_body, validated};

const INVALID_TRANSACTION: &str = "Invalid transaction";

pub struct GetRecurringTransactionsTool;

impl FinanceTool for GetRecurringTransactionsTool {
    const NAME: &'static str = "getRecurringTransactions";
    const TITLE: &'static str = "Get Recurring Transactions";
    const DESCRIPTION: &'static str = "Retrieve recurring transactions. Filter by startDate and endDate to limit the results to a date range; without them all recurring transactions are returned.";
    const READ_ONLY: bool = true;
    type Params = RecurringTransactionFilter;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let filter = validated(parse_recurring_transaction_filter(arguments), "Invalid filter")?;
        let mut query = QueryParams::new();
        query.push_opt("startDate", filter.start_date);
        query.push_opt("endDate", filter.end_date);
        Ok(ApiRequest::get("/recurringTransactions/get").with_query(query))
    }
}

fn input_request(path: &str, arguments: &Value) -> Result<ApiRequest, ToolError> {
    let input: RecurringTransactionInput =
        validated(parse_recurring_transaction_input(arguments), INVALID_TRANSACTION)?;
    Ok(ApiRequest::post(path, json_body(&input)?))
}

fn action_request(path: &str, arguments: &Value) -> Result<ApiRequest, ToolError> {
    let action: RecurringTransactionAction =
        validated(parse_recurring_transaction_action(arguments), INVALID_TRANSACTION)?;
    Ok(ApiRequest::post(path, json_body(&action)?))
}

pub struct CreateRecurringTransactionTool;

impl FinanceTool for CreateRecurringTransactionTool {
    const NAME: &'static str = "createRecurringTransaction";
    const TITLE: &'static str = "Create Recurring Transaction";
    const DESCRIPTION: &'static str = "Create a recurring transaction. Recurring transactions automate entries that occur on a regular basis, such as monthly bills or weekly salaries.";
    const READ_ONLY: bool = false;
    type Params = RecurringTransactionInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        input_request("/recurringTransactions/create", arguments)
    }
}

pub struct EditRecurringTransactionTool;

impl FinanceTool for EditRecurringTransactionTool {
    const NAME: &'static str = "editRecurringTransaction";
    const TITLE: &'static str = "Edit Recurring Transaction";
    const DESCRIPTION: &'static str = "Edit a recurring transaction";
    const READ_ONLY: bool = false;
    type Params = RecurringTransactionInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        input_request("/recurringTransactions/edit", arguments)
    }
}

pub struct MarkRecurringTransactionDoneTool;

impl FinanceTool for MarkRecurringTransactionDoneTool {
    const NAME: &'static str = "markRecurringTransactionDone";
    const TITLE: &'static str = "Mark Recurring Transaction as Done";
    const DESCRIPTION: &'static str = "Mark a recurring transaction as done for the current period";
    const READ_ONLY: bool = false;
    type Params = RecurringTransactionAction;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        action_request("/recurringTransactions/markAsDone", arguments)
    }
}

pub struct SkipRecurringTransactionTool;

impl FinanceTool for SkipRecurringTransactionTool {
    const NAME: &'static str = "skipRecurringTransaction";
    const TITLE: &'static str = "Skip Recurring Transaction";
    const DESCRIPTION: &'static str = "Skip a recurring transaction for the current period";
    const READ_ONLY: bool = false;
    type Params = RecurringTransactionAction;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        action_request("/recurringTransactions/skip", arguments)
    }
}

pub struct DeleteRecurringTransactionTool;

impl FinanceTool for DeleteRecurringTransactionTool {
    const NAME: &'static str = "deleteRecurringTransaction";
    const TITLE: &'static str = "Delete Recurring Transaction";
    const DESCRIPTION: &'static str = "Delete a recurring transaction permanently";
    const READ_ONLY: bool = false;
    type Params = RecurringTransactionAction;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let action = validated(parse_recurring_transaction_action(arguments), INVALID_TRANSACTION)?;
        let mut query = QueryParams::new();
        query.push("transactionId", action.transaction_id);
        Ok(ApiRequest::delete("/recurringTransactions/delete").with_query(query))
    }
}
