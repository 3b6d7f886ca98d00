//! Currency preference tools.

use schemars::JsonSchema;
use serde_json::Value;

use crate::core::api::ApiRequest;
use crate::domains::schemas::{CurrencyPreferenceInput, parse_currency_preference_input};
use crate::domains::tools::{FinanceTool, ToolError, json_body, validated};

/// `getCurrency` takes no arguments.
#[derive(Debug, JsonSchema)]
pub struct NoParams {}

pub struct GetCurrencyTool;

impl FinanceTool for GetCurrencyTool {
    const NAME: &'static str = "getCurrency";
    const TITLE: &'static str = "Get Currency";
    const DESCRIPTION: &'static str = "Get the current currency preference";
    const READ_ONLY: bool = true;
    type Params = NoParams;

    fn build_request(_arguments: &Value) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/currency/get"))
    }
}

pub struct SetCurrencyTool;

impl FinanceTool for SetCurrencyTool {
    const NAME: &'static str = "setCurrency";
    const TITLE: &'static str = "Set Currency";
    const DESCRIPTION: &'static str = "Set currency preference";
    const READ_ONLY: bool = false;
    type Params = CurrencyPreferenceInput;

    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
        let input = validated(parse_currency_preference_input(arguments), "Invalid input")?;
        Ok(ApiRequest::post("/currency/set", json_body(&input)?))
    }
}
