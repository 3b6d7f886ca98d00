//! Category schemas.

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::transactions::TransactionType;
use super::validation::{Fields, Parsed, list, literal, string_min};

/// Transaction type used to scope category lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TransactionTypeInput {
    /// Type of transaction
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Custom categories to create or delete under one transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CustomCategoryAction {
    /// Names of the custom categories
    #[schemars(length(min = 1))]
    pub categories: Vec<String>,

    /// Type of transaction the categories belong to
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

pub fn parse_transaction_type(raw: &Value) -> Parsed<TransactionTypeInput> {
    let mut fields = Fields::new(raw)?;
    let transaction_type = fields.required("type", literal::<TransactionType>);
    fields.finish(|| {
        Some(TransactionTypeInput {
            transaction_type: transaction_type?,
        })
    })
}

pub fn parse_custom_category_action(raw: &Value) -> Parsed<CustomCategoryAction> {
    let mut fields = Fields::new(raw)?;
    let categories = fields.required("categories", |v| {
        list(v, Some((1, "At least one category is required")), |item| {
            string_min(item, 1, Some("Category name cannot be empty"))
        })
    });
    let transaction_type = fields.required("type", literal::<TransactionType>);
    fields.finish(|| {
        Some(CustomCategoryAction {
            categories: categories?,
            transaction_type: transaction_type?,
        })
    })
}
