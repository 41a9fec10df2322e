//! The in-memory expense ledger.

use crate::{
    Error,
    category::{Category, CategoryId},
    config::{LedgerConfig, LedgerSeed},
    expense::{Expense, ExpenseId, ExpenseUpdate, NewExpense},
    month::YearMonth,
    summary::{MonthlySummary, summarize},
    timezone::now_in,
};

/// Owns the budget categories and the recorded expenses.
///
/// Categories are fixed when the ledger is created. Expenses are appended by
/// [Ledger::create_expense] and removed by [Ledger::delete_expense].
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    next_expense_id: ExpenseId,
}

impl Ledger {
    /// Create a ledger holding the categories and expenses in `seed`.
    ///
    /// # Errors
    /// Returns [Error::SeedFile] if `seed` repeats an ID or has no ID left for the next
    /// expense, see [LedgerSeed::validate].
    pub fn new(config: LedgerConfig, seed: LedgerSeed) -> Result<Self, Error> {
        seed.validate()?;
        let next_expense_id = seed.next_expense_id()?;

        tracing::debug!(
            "Created ledger with {} categories and {} expenses",
            seed.categories.len(),
            seed.expenses.len()
        );

        Ok(Self {
            config,
            categories: seed.categories,
            expenses: seed.expenses,
            next_expense_id,
        })
    }

    /// Create a ledger holding the built-in sample data.
    ///
    /// # Errors
    /// Returns an error only if the built-in data is malformed.
    pub fn seeded(config: LedgerConfig) -> Result<Self, Error> {
        Self::new(config, LedgerSeed::builtin()?)
    }

    /// The settings the ledger was created with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// All categories in insertion order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    /// The category with the ID `id`, if there is one.
    pub fn category(&self, id: CategoryId) -> Option<Category> {
        self.find_category(id).cloned()
    }

    /// The expenses in `month`, or all expenses if `month` is `None`, in insertion order.
    pub fn expenses(&self, month: Option<YearMonth>) -> Vec<Expense> {
        match month {
            Some(month) => self
                .expenses
                .iter()
                .filter(|expense| month.contains(expense.date))
                .cloned()
                .collect(),
            None => self.expenses.clone(),
        }
    }

    /// The expense with the ID `id`, if there is one.
    pub fn expense(&self, id: ExpenseId) -> Option<Expense> {
        self.expenses.iter().find(|expense| expense.id == id).cloned()
    }

    /// Summarise spending against limits for every category in `month`.
    pub fn summary(&self, month: YearMonth) -> MonthlySummary {
        summarize(&self.categories, &self.expenses, month)
    }

    /// The current month in the configured local timezone.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the configured timezone is not valid.
    pub fn current_month(&self) -> Result<YearMonth, Error> {
        now_in(&self.config.local_timezone).map(YearMonth::current)
    }

    /// Record a new expense and return the stored record.
    ///
    /// The category name and colour are copied onto the expense. If `new_expense`
    /// refers to a category that does not exist the expense is still recorded with
    /// placeholder category details.
    ///
    /// # Errors
    /// Returns [Error::ExpenseIdsExhausted] if there is no ID left for the expense after
    /// this one.
    pub fn create_expense(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let id = self.next_expense_id;
        self.next_expense_id = id.checked_add(1).ok_or(Error::ExpenseIdsExhausted)?;

        let category = self.find_category(new_expense.category_id);
        if category.is_none() {
            tracing::warn!(
                "Recording expense {id} with unknown category {}",
                new_expense.category_id
            );
        }

        let expense = new_expense.into_expense(id, category);
        self.expenses.push(expense.clone());
        tracing::info!("Created expense {id}");

        Ok(expense)
    }

    /// Apply `update` to the expense with the ID `id` and return the updated record.
    ///
    /// A new category ID that does not refer to an existing category is ignored.
    ///
    /// # Errors
    /// Returns [Error::ExpenseNotFound] if there is no expense with the ID `id`.
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<Expense, Error> {
        let category = update
            .category_id
            .and_then(|category_id| self.find_category(category_id))
            .cloned();

        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(Error::ExpenseNotFound(id))?;

        if let Some(amount) = update.amount {
            expense.amount = amount;
        }
        if let Some(description) = update.description {
            expense.description = description;
        }
        if let Some(date) = update.date {
            expense.date = date;
        }
        match category {
            Some(category) => {
                expense.category_id = category.id;
                expense.category_name = category.name;
                expense.category_color = category.color;
            }
            None if update.category_id.is_some() => {
                tracing::warn!(
                    "Ignoring unknown category {:?} for expense {id}",
                    update.category_id
                );
            }
            None => {}
        }

        tracing::info!("Updated expense {id}");
        Ok(expense.clone())
    }

    /// Remove the expense with the ID `id`.
    ///
    /// Returns whether an expense was removed. Deleting an expense that does not exist
    /// does nothing.
    pub fn delete_expense(&mut self, id: ExpenseId) -> bool {
        match self.expenses.iter().position(|expense| expense.id == id) {
            Some(index) => {
                self.expenses.remove(index);
                tracing::info!("Deleted expense {id}");
                true
            }
            None => {
                tracing::debug!("Tried to delete expense {id} which is not in the ledger");
                false
            }
        }
    }

    fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        Error,
        config::{LedgerConfig, LedgerSeed},
        expense::{Expense, ExpenseUpdate, NewExpense},
        ledger::Ledger,
        month::YearMonth,
        summary::BudgetStatus,
    };

    fn seeded_ledger() -> Ledger {
        Ledger::seeded(LedgerConfig::default()).unwrap()
    }

    fn december() -> YearMonth {
        YearMonth::new(2025, Month::December)
    }

    fn test_expense(category_id: i64) -> NewExpense {
        NewExpense {
            amount: 50.0,
            description: "Test".to_owned(),
            date: date!(2025 - 12 - 01),
            category_id,
        }
    }

    #[track_caller]
    fn assert_approx_eq(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    fn ids(expenses: &[Expense]) -> Vec<i64> {
        expenses.iter().map(|expense| expense.id).collect()
    }

    #[test]
    fn categories_are_returned_in_insertion_order() {
        let ledger = seeded_ledger();

        let names: Vec<_> = ledger
            .categories()
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(
            names,
            vec!["Groceries", "Rent", "Utilities", "Miscellaneous", "Personal"]
        );
    }

    #[test]
    fn month_filter_is_subset_of_all_expenses() {
        let mut ledger = seeded_ledger();
        ledger
            .create_expense(NewExpense {
                date: date!(2026 - 01 - 03),
                ..test_expense(1)
            })
            .unwrap();
        ledger
            .create_expense(NewExpense {
                date: date!(2024 - 12 - 24),
                ..test_expense(2)
            })
            .unwrap();

        let months = [
            december(),
            YearMonth::new(2026, Month::January),
            YearMonth::new(2024, Month::December),
        ];

        for month in months {
            let want: Vec<Expense> = ledger
                .expenses(None)
                .into_iter()
                .filter(|expense| {
                    expense.date.year() == month.year() && expense.date.month() == month.month()
                })
                .collect();

            assert_eq!(ledger.expenses(Some(month)), want, "month {month}");
        }
    }

    #[test]
    fn month_without_expenses_is_empty() {
        let ledger = seeded_ledger();

        let june = YearMonth::new(2025, Month::June);

        assert!(ledger.expenses(Some(june)).is_empty());
    }

    #[test]
    fn seeded_december_summary() {
        let ledger = seeded_ledger();

        let summary = ledger.summary(december());

        assert_eq!(summary.year, 2025);
        assert_eq!(summary.month, 12);
        assert_approx_eq(summary.total_spent, 1642.80);
        assert_approx_eq(summary.total_limit, 2100.0);

        let groceries = &summary.category_breakdown[0];
        assert_eq!(groceries.category_name, "Groceries");
        assert_approx_eq(groceries.spent, 127.80);
        assert_approx_eq(groceries.percent_used, 42.6);
        assert_eq!(groceries.status, BudgetStatus::Ok);
    }

    #[test]
    fn summary_totals_equal_breakdown_sums() {
        let mut ledger = seeded_ledger();
        ledger
            .create_expense(NewExpense {
                amount: 999.0,
                ..test_expense(999)
            })
            .unwrap();

        let summary = ledger.summary(december());

        let spent: f64 = summary.category_breakdown.iter().map(|c| c.spent).sum();
        let limit: f64 = summary.category_breakdown.iter().map(|c| c.limit).sum();
        assert_approx_eq(summary.total_spent, spent);
        assert_approx_eq(summary.total_limit, limit);
    }

    #[test]
    fn create_expense_copies_category_and_is_listed() {
        let mut ledger = seeded_ledger();
        let existing_ids = ids(&ledger.expenses(None));

        let expense = ledger.create_expense(test_expense(1)).unwrap();

        assert_eq!(expense.category_name, "Groceries");
        assert_eq!(expense.category_color, "#22c55e");
        assert!(!existing_ids.contains(&expense.id));
        assert!(ledger.expenses(Some(december())).contains(&expense));
    }

    #[test]
    fn create_expense_with_unknown_category_uses_defaults() {
        let mut ledger = seeded_ledger();

        let expense = ledger.create_expense(test_expense(999)).unwrap();

        assert_eq!(expense.category_id, 999);
        assert_eq!(expense.category_name, "Unknown");
        assert_eq!(expense.category_color, "#6b7280");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut ledger = seeded_ledger();
        assert!(ledger.delete_expense(3));

        let first = ledger.create_expense(test_expense(1)).unwrap();
        let second = ledger.create_expense(test_expense(1)).unwrap();

        assert_eq!(first.id, 8);
        assert_eq!(second.id, 9);
        assert!(!ids(&ledger.expenses(None)).contains(&3));
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut ledger = seeded_ledger();

        assert!(ledger.delete_expense(4));
        assert_eq!(ids(&ledger.expenses(None)), vec![1, 2, 3, 5, 6, 7]);

        assert!(!ledger.delete_expense(4));
        assert_eq!(ids(&ledger.expenses(None)), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn empty_ledger_starts_ids_at_one() {
        let mut ledger = Ledger::new(LedgerConfig::default(), LedgerSeed::default()).unwrap();

        let expense = ledger.create_expense(test_expense(1)).unwrap();

        assert_eq!(expense.id, 1);
        assert_eq!(expense.category_name, "Unknown");
    }

    #[test]
    fn new_rejects_seed_with_duplicate_ids() {
        let mut seed = LedgerSeed::builtin().unwrap();
        let duplicate = seed.expenses[0].clone();
        seed.expenses.push(duplicate);

        let result = Ledger::new(LedgerConfig::default(), seed);

        assert!(matches!(result, Err(Error::SeedFile(_))));
    }

    #[test]
    fn new_rejects_seed_with_largest_expense_id() {
        let mut seed = LedgerSeed::builtin().unwrap();
        seed.expenses[0].id = i64::MAX;

        let result = Ledger::new(LedgerConfig::default(), seed);

        assert!(matches!(result, Err(Error::SeedFile(_))));
    }

    #[test]
    fn create_expense_fails_when_ids_run_out() {
        let mut seed = LedgerSeed::builtin().unwrap();
        seed.expenses[0].id = i64::MAX - 1;
        let mut ledger = Ledger::new(LedgerConfig::default(), seed).unwrap();

        let result = ledger.create_expense(test_expense(1));

        assert_eq!(result, Err(Error::ExpenseIdsExhausted));
        assert_eq!(ledger.expenses(None).len(), 7);
    }

    #[test]
    fn lookups_by_id() {
        let ledger = seeded_ledger();

        assert_eq!(
            ledger.category(2).map(|category| category.name),
            Some("Rent".to_owned())
        );
        assert_eq!(ledger.category(42), None);
        assert_eq!(
            ledger.expense(6).map(|expense| expense.description),
            Some("Haircut".to_owned())
        );
        assert_eq!(ledger.expense(42), None);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut ledger = seeded_ledger();

        let expense = ledger
            .update_expense(
                1,
                ExpenseUpdate {
                    amount: Some(50.0),
                    category_id: Some(5),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(expense.amount, 50.0);
        assert_eq!(expense.description, "Weekly groceries");
        assert_eq!(expense.date, date!(2025 - 12 - 15));
        assert_eq!(expense.category_name, "Personal");
        assert_eq!(expense.category_color, "#8b5cf6");
        assert_eq!(ledger.expense(1), Some(expense));
    }

    #[test]
    fn update_ignores_unknown_category() {
        let mut ledger = seeded_ledger();

        let expense = ledger
            .update_expense(
                2,
                ExpenseUpdate {
                    category_id: Some(999),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(expense.category_id, 1);
        assert_eq!(expense.category_name, "Groceries");
    }

    #[test]
    fn update_missing_expense_fails() {
        let mut ledger = seeded_ledger();

        let result = ledger.update_expense(42, ExpenseUpdate::default());

        assert_eq!(result, Err(Error::ExpenseNotFound(42)));
    }

    #[test]
    fn current_month_fails_for_invalid_timezone() {
        let ledger =
            Ledger::new(LedgerConfig::new("Not/A_Zone"), LedgerSeed::default()).unwrap();

        assert_eq!(
            ledger.current_month(),
            Err(Error::InvalidTimezone("Not/A_Zone".to_owned()))
        );
    }
}
