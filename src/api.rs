//! The asynchronous data-access interface used by application code.
//!
//! [BudgetApi] is the seam where the in-memory [Ledger] can later be swapped for a client
//! of the budget REST API. The [Ledger] implementation completes every call immediately.

use crate::{
    Error,
    category::Category,
    expense::{Expense, ExpenseId, NewExpense},
    ledger::Ledger,
    month::YearMonth,
    summary::MonthlySummary,
};

/// Fetches and records budget data.
///
/// Months are given as strings in the format "YYYY-MM", matching the query parameters of
/// the REST API.
pub trait BudgetApi {
    /// Get all categories. Corresponds to `GET /api/categories`.
    fn fetch_categories(&self) -> impl Future<Output = Vec<Category>> + Send;

    /// Get the expenses in `month`, or all expenses if `month` is `None`.
    /// Corresponds to `GET /api/expenses?month=`.
    ///
    /// Anything after the month, such as the day in "2025-12-01", is ignored. A malformed
    /// `month` matches no expenses.
    fn fetch_expenses(&self, month: Option<&str>) -> impl Future<Output = Vec<Expense>> + Send;

    /// Get the spending summary for `month`, or for the current month if `month` is `None`.
    /// Corresponds to `GET /api/summary?month=`.
    fn fetch_summary(
        &self,
        month: Option<&str>,
    ) -> impl Future<Output = Result<MonthlySummary, Error>> + Send;

    /// Record a new expense and get the stored record. Corresponds to `POST /api/expenses`.
    fn create_expense(
        &mut self,
        expense: NewExpense,
    ) -> impl Future<Output = Result<Expense, Error>> + Send;

    /// Delete the expense with the ID `id`, if it exists.
    /// Corresponds to `DELETE /api/expenses/{id}`.
    fn delete_expense(&mut self, id: ExpenseId) -> impl Future<Output = ()> + Send;
}

impl BudgetApi for Ledger {
    async fn fetch_categories(&self) -> Vec<Category> {
        tracing::debug!("Fetching categories");
        self.categories()
    }

    async fn fetch_expenses(&self, month: Option<&str>) -> Vec<Expense> {
        tracing::debug!("Fetching expenses for month {month:?}");

        match month.map(YearMonth::from_leading_parts) {
            None => self.expenses(None),
            Some(Ok(month)) => self.expenses(Some(month)),
            Some(Err(error)) => {
                tracing::warn!("No expenses match: {error}");
                Vec::new()
            }
        }
    }

    async fn fetch_summary(&self, month: Option<&str>) -> Result<MonthlySummary, Error> {
        tracing::debug!("Fetching summary for month {month:?}");

        let month = match month {
            Some(month) => month.parse()?,
            None => self.current_month()?,
        };

        Ok(self.summary(month))
    }

    async fn create_expense(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        Ledger::create_expense(self, expense)
    }

    async fn delete_expense(&mut self, id: ExpenseId) {
        Ledger::delete_expense(self, id);
    }
}
