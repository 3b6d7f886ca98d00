//! Transaction schemas and the literal sets shared with other domains.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::decimal::{DecimalRule, amount_schema};
use super::validation::{Fields, Literal, Parsed, boolean, date, list, literal, string_min};

pub const AMOUNT_RULE: DecimalRule = DecimalRule::positive("Amount must be greater than zero");

/// Kind of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Investment,
}

impl Literal for TransactionType {
    const ALL: &'static [Self] = &[Self::Income, Self::Expense, Self::Investment];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Investment => "investment",
        }
    }
}

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum PaymentMode {
    Cash,
    Cheque,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Mobile Wallet")]
    MobileWallet,
    Netbanking,
    Sodexo,
    #[serde(rename = "UPI")]
    Upi,
}

impl Literal for PaymentMode {
    const ALL: &'static [Self] = &[
        Self::Cash,
        Self::Cheque,
        Self::CreditCard,
        Self::DebitCard,
        Self::MobileWallet,
        Self::Netbanking,
        Self::Sodexo,
        Self::Upi,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Cheque => "Cheque",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::MobileWallet => "Mobile Wallet",
            Self::Netbanking => "Netbanking",
            Self::Sodexo => "Sodexo",
            Self::Upi => "UPI",
        }
    }
}

/// A transaction to create or edit.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Amount of the transaction, as a decimal string or number. Must be greater than zero.
    #[schemars(schema_with = "amount_schema")]
    pub amount: Decimal,

    /// Category of the transaction. Try to be as specific as possible since this helps in better analysis of spending patterns.
    pub category: String,

    /// Description of the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this a new custom category?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new_custom_category: Option<bool>,

    /// Payment mode
    pub payment_mode: PaymentMode,

    /// Id of the existing transaction. If creating a new transaction, this should be null or undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Type of the transaction
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// Filters for listing transactions.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Filter by categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    /// Filter by end date (YYYY-MM-DD). The difference between startDate and endDate must not exceed 1 year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Filter by payment modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_modes: Option<PaymentMode>,

    /// Filter by start date (YYYY-MM-DD)
    pub start_date: String,

    /// Filter by transaction types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TransactionType>>,
}

/// Identifies a transaction to delete.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDeleteInput {
    /// ID of the transaction to delete
    pub transaction_id: String,
}

pub fn parse_transaction_input(raw: &Value) -> Parsed<TransactionInput> {
    let mut fields = Fields::new(raw)?;

    let amount = fields.decimal("amount", AMOUNT_RULE);
    let category = fields.required("category", |v| {
        string_min(v, 1, Some("Please select a category"))
    });
    let description = fields.nullish("description", |v| string_min(v, 0, None));
    let is_new_custom_category = fields.optional("isNewCustomCategory", boolean);
    let payment_mode = fields.required("paymentMode", literal::<PaymentMode>);
    let transaction_id = fields.optional("transactionId", |v| string_min(v, 18, None));
    let transaction_type = fields.required("type", literal::<TransactionType>);

    fields.finish(|| {
        Some(TransactionInput {
            amount: amount?,
            category: category?,
            description: description?,
            is_new_custom_category: is_new_custom_category?,
            payment_mode: payment_mode?,
            transaction_id: transaction_id?,
            transaction_type: transaction_type?,
        })
    })
}

pub fn parse_transaction_filter(raw: &Value) -> Parsed<TransactionFilter> {
    let mut fields = Fields::new(raw)?;

    let categories = fields.optional("categories", |v| {
        list(v, None, |item| string_min(item, 1, None))
    });
    let end_date = fields.optional("endDate", date);
    let payment_modes = fields.optional("paymentModes", literal::<PaymentMode>);
    let start_date = fields.required("startDate", date);
    let types = fields.optional("types", |v| list(v, None, literal::<TransactionType>));

    fields.finish(|| {
        Some(TransactionFilter {
            categories: categories?,
            end_date: end_date?,
            payment_modes: payment_modes?,
            start_date: start_date?,
            types: types?,
        })
    })
}

pub fn parse_transaction_delete_input(raw: &Value) -> Parsed<TransactionDeleteInput> {
    let mut fields = Fields::new(raw)?;
    let transaction_id = fields.required("transactionId", |v| string_min(v, 12, None));
    fields.finish(|| {
        Some(TransactionDeleteInput {
            transaction_id: transaction_id?,
        })
    })
}
