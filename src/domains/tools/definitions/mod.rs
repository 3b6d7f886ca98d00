//! Tool definitions, one module per API area.

pub mod budget;
pub mod categories;
pub mod currency;
pub mod recurring;
pub mod transactions;

pub use budget::{GetBudgetTool, SetBudgetTool};
pub use categories::{
    CreateCustomCategoriesTool, DeleteCustomCategoriesTool, GetCategoriesByTypeTool,
    GetCustomCategoriesTool,
};
pub use currency::{GetCurrencyTool, NoParams, SetCurrencyTool};
pub use recurring::{
    CreateRecurringTransactionTool, DeleteRecurringTransactionTool, EditRecurringTransactionTool,
    GetRecurringTransactionsTool, MarkRecurringTransactionDoneTool, SkipRecurringTransactionTool,
};
pub use transactions::{
    CreateTransactionTool, DeleteTransactionTool, EditTransactionTool, GetTransactionsTool,
};
