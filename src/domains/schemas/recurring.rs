//! Recurring transaction schemas.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::decimal::amount_schema;
use super::transactions::{AMOUNT_RULE, PaymentMode, TransactionType};
use super::validation::{
    Fields, Literal, Parsed, date, datetime, integer, literal, string_min,
};

pub const MIN_INTERVAL: i64 = 1;
pub const MAX_INTERVAL: i64 = 500;

/// Unit of a recurrence interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    Day,
    Month,
    Year,
}

impl Literal for Occurrence {
    const ALL: &'static [Self] = &[Self::Day, Self::Month, Self::Year];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Date range for listing recurring transactions; both bounds optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionFilter {
    /// End date to filter recurring transactions (YYYY-MM-DD). If not provided, no default filter is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Start date to filter recurring transactions (YYYY-MM-DD). If not provided, no default filter is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

/// A recurring transaction to create or edit.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionInput {
    /// Amount of the recurring transaction, as a decimal string or number. Must be greater than zero.
    #[schemars(schema_with = "amount_schema")]
    pub amount: Decimal,

    /// Category of the recurring transaction
    pub category: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Interval for the recurrence, for example, 1 for every day, 2 for every two months, etc.
    #[schemars(range(min = 1, max = 500))]
    pub interval: u32,

    /// Frequency of the recurrence, for example, 'day' for daily, 'month' for monthly, 'year' for yearly
    pub occurrence: Occurrence,

    /// Payment mode
    pub payment_mode: PaymentMode,

    /// Start date of the recurring transaction (ISO-8601 UTC timestamp). If not provided, it adds the transaction to the next occurrence based on the current date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Id of the existing transaction. If creating a new transaction, this should be null or undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Type of the recurring transaction
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Identifies a recurring transaction for done/skip/delete.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransactionAction {
    /// ID of the recurring transaction to mark as done, skip or delete
    pub transaction_id: String,
}

pub fn parse_recurring_transaction_filter(raw: &Value) -> Parsed<RecurringTransactionFilter> {
    let mut fields = Fields::new(raw)?;
    let end_date = fields.optional("endDate", date);
    let start_date = fields.optional("startDate", date);
    fields.finish(|| {
        Some(RecurringTransactionFilter {
            end_date: end_date?,
            start_date: start_date?,
        })
    })
}

pub fn parse_recurring_transaction_input(raw: &Value) -> Parsed<RecurringTransactionInput> {
    let mut fields = Fields::new(raw)?;

    let amount = fields.decimal("amount", AMOUNT_RULE);
    let category = fields.required("category", |v| {
        string_min(v, 1, Some("Please select a category"))
    });
    let description = fields.optional("description", |v| string_min(v, 0, None));
    let interval = fields.required("interval", |v| {
        integer(v, MIN_INTERVAL, "Number must be greater than zero", MAX_INTERVAL)
    });
    let occurrence = fields.required("occurrence", literal::<Occurrence>);
    let payment_mode = fields.required("paymentMode", literal::<PaymentMode>);
    let start_date = fields.optional("startDate", datetime);
    let transaction_id = fields.optional("transactionId", |v| string_min(v, 12, None));
    let transaction_type = fields.required("type", literal::<TransactionType>);

    fields.finish(|| {
        Some(RecurringTransactionInput {
            amount: amount?,
            category: category?,
            description: description?,
            interval: u32::try_from(interval?).ok()?,
            occurrence: occurrence?,
            payment_mode: payment_mode?,
            start_date: start_date?,
            transaction_id: transaction_id?,
            transaction_type: transaction_type?,
        })
    })
}

pub fn parse_recurring_transaction_action(raw: &Value) -> Parsed<RecurringTransactionAction> {
    let mut fields = Fields::new(raw)?;
    let transaction_id = fields.required("transactionId", |v| string_min(v, 12, None));
    fields.finish(|| {
        Some(RecurringTransactionAction {
            transaction_id: transaction_id?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_input() -> Value {
        json!({
            "amount": 1200,
            "category": "Rent",
            "interval": 1,
            "occurrence": "month",
            "paymentMode": "Netbanking",
            "type": "expense"
        })
    }

    #[test]
    fn test_valid_recurring_input() {
        let input = parse_recurring_transaction_input(&valid_input()).unwrap();
        assert_eq!(input.amount, Decimal::from(1200));
        assert_eq!(input.interval, 1);
        assert_eq!(input.occurrence, Occurrence::Month);
        assert_eq!(input.payment_mode, PaymentMode::Netbanking);
        assert!(input.start_date.is_none());
    }

    #[test]
    fn test_interval_bounds() {
        let mut raw = valid_input();
        raw["interval"] = json!(0);
        let errors = parse_recurring_transaction_input(&raw).unwrap_err();
        assert_eq!(errors.get("interval"), Some("Number must be greater than zero"));

        raw["interval"] = json!(501);
        let errors = parse_recurring_transaction_input(&raw).unwrap_err();
        assert_eq!(
            errors.get("interval"),
            Some("Number must be less than or equal to 500")
        );

        raw["interval"] = json!(500);
        assert!(parse_recurring_transaction_input(&raw).is_ok());

        raw["interval"] = json!(1.5);
        let errors = parse_recurring_transaction_input(&raw).unwrap_err();
        assert_eq!(errors.get("interval"), Some("Expected integer, received float"));
    }

    #[test]
    fn test_start_date_must_be_datetime() {
        let mut raw = valid_input();
        raw["startDate"] = json!("2024-05-01");
        let errors = parse_recurring_transaction_input(&raw).unwrap_err();
        assert_eq!(errors.get("startDate"), Some("Invalid datetime"));

        raw["startDate"] = json!("2024-05-01T00:00:00Z");
        let input = parse_recurring_transaction_input(&raw).unwrap();
        assert_eq!(input.start_date.as_deref(), Some("2024-05-01T00:00:00Z"));
    }

    #[test]
    fn test_unknown_occurrence() {
        let mut raw = valid_input();
        raw["occurrence"] = json!("week");
        let errors = parse_recurring_transaction_input(&raw).unwrap_err();
        assert_eq!(
            errors.get("occurrence"),
            Some("Invalid enum value. Expected 'day' | 'month' | 'year', received 'week'")
        );
    }

    #[test]
    fn test_recurring_transaction_id_min_length() {
        let mut raw = valid_input();
        raw["transactionId"] = json!("rec123456789");
        assert!(parse_recurring_transaction_input(&raw).is_ok());

        raw["transactionId"] = json!("rec1");
        assert!(parse_recurring_transaction_input(&raw).is_err());
    }

    #[test]
    fn test_filter_bounds_are_optional() {
        let filter = parse_recurring_transaction_filter(&json!({})).unwrap();
        assert_eq!(filter, RecurringTransactionFilter::default());

        let errors = parse_recurring_transaction_filter(&json!({ "endDate": "soon" })).unwrap_err();
        assert_eq!(errors.get("endDate"), Some("Invalid date"));
    }

    #[test]
    fn test_action_requires_id() {
        let errors = parse_recurring_transaction_action(&json!({})).unwrap_err();
        assert_eq!(errors.get("transactionId"), Some("Required"));

        let action =
            parse_recurring_transaction_action(&json!({ "transactionId": "rec123456789" })).unwrap();
        assert_eq!(action.transaction_id, "rec123456789");
    }

    #[test]
    fn test_body_serialization() {
        let input = parse_recurring_transaction_input(&valid_input()).unwrap();
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({
                "amount": "1200",
                "category": "Rent",
                "interval": 1,
                "occurrence": "month",
                "paymentMode": "Netbanking",
                "type": "expense"
            })
        );
    }
}
