//! Budget Ledger is the data-access layer of a budget tracking app.
//!
//! It keeps spending categories and dated expenses in memory and reports how much of each
//! category's monthly limit has been spent. Application code talks to it through the
//! asynchronous [BudgetApi] trait so that the in-memory [Ledger] can later be replaced by
//! a client of the budget REST API.

#![warn(missing_docs)]

mod api;
mod category;
mod config;
mod error;
mod expense;
mod ledger;
mod month;
mod summary;
mod timezone;

pub use api::BudgetApi;
pub use category::{Category, CategoryId, DEFAULT_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME};
pub use config::{DEFAULT_TIMEZONE, LedgerConfig, LedgerSeed};
pub use error::Error;
pub use expense::{Expense, ExpenseId, ExpenseUpdate, NewExpense, parse_date};
pub use ledger::Ledger;
pub use month::YearMonth;
pub use summary::{
    BudgetStatus, CategorySummary, EXCEEDED_THRESHOLD, MonthlySummary, WARNING_THRESHOLD,
    percent_used,
};
pub use timezone::get_local_offset;
