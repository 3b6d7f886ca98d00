//! Input schemas.
//!
//! One module per API area. Each exposes typed inputs (which also provide
//! the JSON Schema advertised to MCP clients) and `parse_*` entry points
//! that validate untyped arguments into them.

pub mod budget;
pub mod categories;
pub mod currency;
pub mod decimal;
pub mod recurring;
pub mod transactions;
pub mod validation;

pub use budget::{BudgetFilter, BudgetInput, parse_budget_filter, parse_budget_input};
pub use categories::{
    CustomCategoryAction, TransactionTypeInput, parse_custom_category_action,
    parse_transaction_type,
};
pub use currency::{CurrencyPreferenceInput, parse_currency_preference_input};
pub use decimal::{DecimalRule, parse_decimal};
pub use recurring::{
    Occurrence, RecurringTransactionAction, RecurringTransactionFilter, RecurringTransactionInput,
    parse_recurring_transaction_action, parse_recurring_transaction_filter,
    parse_recurring_transaction_input,
};
pub use transactions::{
    PaymentMode, TransactionDeleteInput, TransactionFilter, TransactionInput, TransactionType,
    parse_transaction_delete_input, parse_transaction_filter, parse_transaction_input,
};
pub use validation::{FieldErrors, Literal, Parsed};
