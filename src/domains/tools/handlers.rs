//! Shared tool machinery.
//!
//! Every tool validates its arguments, shapes one [`ApiRequest`], sends it
//! and returns the response payload serialised as JSON text. The
//! [`FinanceTool`] trait captures the per-tool parts; the functions here
//! do the rest for both the rmcp router and the HTTP registry.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::ToolError;
use crate::core::api::{ApiRequest, FinanceApi};
use crate::domains::schemas::Parsed;

/// A single finance API operation exposed as an MCP tool.
pub trait FinanceTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Short human-readable title.
    const TITLE: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Whether the tool only reads data.
    const READ_ONLY: bool;

    /// Advertised input schema.
    type Params: JsonSchema + 'static;

    /// Validate arguments and shape the outbound request.
    fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(Self::TITLE.to_string()),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            output_schema: None,
            annotations: Some(ToolAnnotations {
                title: Some(Self::TITLE.to_string()),
                read_only_hint: Some(Self::READ_ONLY),
                destructive_hint: None,
                idempotent_hint: None,
                open_world_hint: Some(false),
            }),
            icons: None,
            meta: None,
        }
    }
}

/// Turn a schema outcome into a tool error carrying `context`.
pub fn validated<T>(parsed: Parsed<T>, context: &'static str) -> Result<T, ToolError> {
    parsed.map_err(|errors| ToolError::validation(context, errors))
}

/// Serialise a validated input as a request body.
pub fn json_body<T: Serialize>(input: &T) -> Result<Value, ToolError> {
    Ok(serde_json::to_value(input)?)
}

/// Run a tool: validate, send exactly one request, return the payload as JSON text.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: FinanceTool>(
    api: &dyn FinanceApi,
    arguments: &Value,
) -> Result<String, ToolError> {
    let request = T::build_request(arguments).inspect_err(|e| warn!("Rejected arguments: {}", e))?;
    debug!("{} {}", request.method, request.path);

    let response = api.send(request).await.map_err(|e| {
        warn!("Request failed: {}", e);
        ToolError::from(e)
    })?;

    Ok(serde_json::to_string(&response.data)?)
}

/// Map a tool outcome onto an MCP result; failures become `isError` results.
pub fn call_result(result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
    }
}

/// Create a ToolRoute for STDIO transport.
pub fn create_route<T, S>(api: Arc<dyn FinanceApi>) -> ToolRoute<S>
where
    T: FinanceTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(T::to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx
            .arguments
            .clone()
            .map(Value::Object)
            .unwrap_or(Value::Null);
        let api = api.clone();
        async move { Ok::<_, McpError>(call_result(execute::<T>(api.as_ref(), &arguments).await)) }
            .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::UpstreamError;
    use crate::domains::schemas::{Literal, TransactionTypeInput, parse_transaction_type};
    use crate::domains::tools::testing::RecordingApi;
    use rmcp::model::RawContent;
    use serde_json::json;

    struct LookupTool;

    impl FinanceTool for LookupTool {
        const NAME: &'static str = "lookup";
        const TITLE: &'static str = "Lookup";
        const DESCRIPTION: &'static str = "Look something up";
        const READ_ONLY: bool = true;
        type Params = TransactionTypeInput;

        fn build_request(arguments: &Value) -> Result<ApiRequest, ToolError> {
            let input = validated(parse_transaction_type(arguments), "Invalid transaction type")?;
            let mut request = ApiRequest::get("/lookup");
            request.query.push("type", input.transaction_type.as_str());
            Ok(request)
        }
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = LookupTool::to_tool();
        assert_eq!(tool.name, "lookup");
        assert_eq!(tool.title.as_deref(), Some("Lookup"));
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.open_world_hint, Some(false));
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[test]
    fn test_execute_returns_payload_verbatim() {
        let api = RecordingApi::ok(json!(["Food", "Transport"]));
        let text = tokio_test::block_on(execute::<LookupTool>(&api, &json!({ "type": "expense" })))
            .unwrap();
        assert_eq!(text, r#"["Food","Transport"]"#);
        assert_eq!(api.requests().len(), 1);
    }

    #[test]
    fn test_validation_failure_sends_nothing() {
        let api = RecordingApi::ok(json!(null));
        let err = tokio_test::block_on(execute::<LookupTool>(&api, &json!({ "type": "gift" })))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid transaction type: "));
        assert!(api.requests().is_empty());
    }

    #[test]
    fn test_upstream_failure_becomes_error_result() {
        let api = RecordingApi::failing(UpstreamError {
            body: json!({ "message": "not found" }),
            status: 404,
            status_text: "Not Found".to_string(),
        });
        let result = call_result(tokio_test::block_on(execute::<LookupTool>(
            &api,
            &json!({ "type": "expense" }),
        )));
        assert_eq!(result.is_error, Some(true));
        let detail: Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(detail["status"], 404);
        assert_eq!(detail["body"], json!({ "message": "not found" }));
    }

    #[test]
    fn test_success_result_is_text() {
        let result = call_result(Ok("{\"ok\":true}".to_string()));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "{\"ok\":true}");
    }
}
