//! Aggregates a month of expenses into a per-category report of spending against limits.

use serde::{Deserialize, Serialize};

use crate::{
    category::{Category, CategoryId},
    expense::Expense,
    month::YearMonth,
};

/// The percentage of the limit at or above which a category is in [BudgetStatus::Warning].
pub const WARNING_THRESHOLD: f64 = 80.0;

/// The percentage of the limit above which a category is in [BudgetStatus::Exceeded].
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// How spending in a category compares to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Less than 80% of the limit has been spent.
    Ok,
    /// Between 80% and 100% (inclusive) of the limit has been spent.
    Warning,
    /// More than the limit has been spent.
    Exceeded,
}

impl BudgetStatus {
    /// Classify `percent_used`, see [percent_used].
    pub fn from_percent_used(percent_used: f64) -> Self {
        if percent_used > EXCEEDED_THRESHOLD {
            BudgetStatus::Exceeded
        } else if percent_used >= WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Ok
        }
    }
}

/// `spent` as a percentage of `limit`, or zero if `limit` is zero.
pub fn percent_used(spent: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        spent / limit * 100.0
    } else {
        0.0
    }
}

/// Spending against the limit of a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// The ID of the category.
    pub category_id: CategoryId,
    /// The name of the category.
    pub category_name: String,
    /// The colour of the category.
    pub category_color: String,
    /// The total amount spent in the category.
    pub spent: f64,
    /// The monthly limit of the category.
    pub limit: f64,
    /// `spent` as a percentage of `limit`.
    pub percent_used: f64,
    /// How `spent` compares to `limit`.
    pub status: BudgetStatus,
}

/// Spending against limits for every category in a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// The year of the summarised month.
    pub year: i32,
    /// The summarised month, 1 for January through 12 for December.
    pub month: u8,
    /// The sum of `spent` over the category breakdown.
    pub total_spent: f64,
    /// The sum of `limit` over the category breakdown.
    pub total_limit: f64,
    /// One entry per category, in the order the categories were given.
    pub category_breakdown: Vec<CategorySummary>,
}

/// Summarise spending in `month` for each of `categories`.
///
/// Expenses outside of `month` are ignored, as are expenses whose category is not in
/// `categories`.
pub fn summarize(
    categories: &[Category],
    expenses: &[Expense],
    month: YearMonth,
) -> MonthlySummary {
    let month_expenses: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| month.contains(expense.date))
        .collect();

    let category_breakdown: Vec<CategorySummary> = categories
        .iter()
        .map(|category| {
            let spent = month_expenses
                .iter()
                .filter(|expense| expense.category_id == category.id)
                .map(|expense| expense.amount)
                .sum();

            summarize_category(category, spent)
        })
        .collect();

    let total_spent = category_breakdown.iter().map(|summary| summary.spent).sum();
    let total_limit = category_breakdown.iter().map(|summary| summary.limit).sum();

    MonthlySummary {
        year: month.year(),
        month: month.month().into(),
        total_spent,
        total_limit,
        category_breakdown,
    }
}

fn summarize_category(category: &Category, spent: f64) -> CategorySummary {
    let limit = category.monthly_limit;
    let percent_used = percent_used(spent, limit);

    CategorySummary {
        category_id: category.id,
        category_name: category.name.clone(),
        category_color: category.color.clone(),
        spent,
        limit,
        percent_used,
        status: BudgetStatus::from_percent_used(percent_used),
    }
}
