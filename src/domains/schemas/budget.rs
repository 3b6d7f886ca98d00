//! Budget (target) schemas.
//!
//! A budget is a per-category breakdown; its total is derived here as the
//! exact decimal sum of the breakdown and sent alongside it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::decimal::{DecimalRule, amount_map_schema, parse_decimal};
use super::validation::{Fields, Parsed, boolean, month, type_name};

const BREAKDOWN_RULE: DecimalRule = DecimalRule::non_negative("Budget has to be more than zero");

/// Period selection for reading budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetFilter {
    /// Whether to provide a breakdown of the total by category. Defaults to false.
    #[serde(default)]
    pub break_down_by_category: bool,

    /// End month to filter targets, in YYYY-MM format. Defaults to the next month after startMonth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_month: Option<String>,

    /// Start month to filter targets, in YYYY-MM format
    pub start_month: String,
}

/// Budget amounts per category plus their derived total.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct BudgetInput {
    /// Breakdown of the budget by category. Keys are category names, values are budget amounts (decimal strings or numbers, zero or more).
    #[schemars(schema_with = "amount_map_schema")]
    pub breakdown: BTreeMap<String, Decimal>,

    /// Sum of all breakdown amounts.
    #[schemars(skip)]
    pub total: Decimal,
}

pub fn parse_budget_filter(raw: &Value) -> Parsed<BudgetFilter> {
    let mut fields = Fields::new(raw)?;
    let break_down_by_category = fields.defaulted("breakDownByCategory", false, boolean);
    let end_month = fields.nullish("endMonth", |v| {
        month(v, "End month needs to be in YYYY-MM format")
    });
    let start_month = fields.required("startMonth", |v| {
        month(v, "Start month needs to be in YYYY-MM format")
    });
    fields.finish(|| {
        Some(BudgetFilter {
            break_down_by_category: break_down_by_category?,
            end_month: end_month?,
            start_month: start_month?,
        })
    })
}

fn breakdown(value: &Value) -> Result<(BTreeMap<String, Decimal>, Decimal), String> {
    let entries = value
        .as_object()
        .ok_or_else(|| format!("Expected object, received {}", type_name(value)))?;

    let mut issue = None;
    let mut parsed = BTreeMap::new();
    for (category, amount) in entries {
        if category.is_empty() {
            issue = Some("String must contain at least 1 character(s)".to_string());
        }
        match parse_decimal(amount, BREAKDOWN_RULE) {
            Ok(amount) => {
                parsed.insert(category.clone(), amount);
            }
            Err(message) => issue = Some(message),
        }
    }

    if parsed.is_empty() && issue.is_none() {
        issue = Some("At least one category budget is required".to_string());
    }

    if let Some(message) = issue {
        return Err(message);
    }

    let total = parsed
        .values()
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount))
        .ok_or_else(|| "Budget total is too large".to_string())?;
    Ok((parsed, total))
}

pub fn parse_budget_input(raw: &Value) -> Parsed<BudgetInput> {
    let mut fields = Fields::new(raw)?;
    let breakdown = fields.required("breakdown", breakdown);
    fields.finish(|| {
        let (breakdown, total) = breakdown?;
        Some(BudgetInput { breakdown, total })
    })
}
