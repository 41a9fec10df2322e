//! Defines the `Expense` type, the request types for creating and updating expenses and the
//! expenses the ledger is seeded with.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    category::{Category, CategoryId, DEFAULT_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME},
};

/// Alias for the integer type used for expense IDs.
pub type ExpenseId = i64;

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// Parse an ISO calendar date such as "2025-12-01".
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid "YYYY-MM-DD" date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// A single dated spending record attributed to a category.
///
/// The category name and colour are a snapshot of the category taken when the expense
/// was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// How much was spent.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// When the money was spent.
    pub date: Date,
    /// The category the expense belongs to. May refer to a category that does not exist.
    pub category_id: CategoryId,
    /// The name of the category at the time the expense was recorded.
    pub category_name: String,
    /// The colour of the category at the time the expense was recorded.
    pub category_color: String,
}

/// The data needed to record a new expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// How much was spent.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// When the money was spent.
    pub date: Date,
    /// The category the expense belongs to.
    pub category_id: CategoryId,
}

impl NewExpense {
    /// Turn the request into a stored expense with the ID `id`.
    ///
    /// The category name and colour are copied from `category`, falling back to
    /// [UNKNOWN_CATEGORY_NAME] and [DEFAULT_CATEGORY_COLOR] when there is no category.
    pub(crate) fn into_expense(self, id: ExpenseId, category: Option<&Category>) -> Expense {
        let (category_name, category_color) = category_snapshot(category);

        Expense {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            category_id: self.category_id,
            category_name,
            category_color,
        }
    }
}

/// A partial update to an expense. Fields left as `None` are not changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    /// The new amount.
    pub amount: Option<f64>,
    /// The new description.
    pub description: Option<String>,
    /// The new date.
    pub date: Option<Date>,
    /// The new category. Ignored if it does not refer to an existing category.
    pub category_id: Option<CategoryId>,
}

fn category_snapshot(category: Option<&Category>) -> (String, String) {
    match category {
        Some(category) => (category.name.clone(), category.color.clone()),
        None => (
            UNKNOWN_CATEGORY_NAME.to_owned(),
            DEFAULT_CATEGORY_COLOR.to_owned(),
        ),
    }
}

/// The expenses a fresh ledger starts with, attributed to `categories`.
///
/// # Errors
/// Returns an error only if one of the built-in dates is malformed.
pub fn seed_expenses(categories: &[Category]) -> Result<Vec<Expense>, Error> {
    const SEED: [(f64, &str, &str, CategoryId); 7] = [
        (45.50, "Weekly groceries", "2025-12-15", 1),
        (82.30, "Grocery run", "2025-12-22", 1),
        (1200.00, "December rent", "2025-12-01", 2),
        (95.00, "Electric bill", "2025-12-10", 3),
        (65.00, "Internet", "2025-12-05", 3),
        (35.00, "Haircut", "2025-12-20", 5),
        (120.00, "Christmas gifts", "2025-12-23", 4),
    ];

    SEED.iter()
        .zip(1..)
        .map(|(&(amount, description, date, category_id), id)| {
            let category = categories
                .iter()
                .find(|category| category.id == category_id);

            Ok(NewExpense {
                amount,
                description: description.to_owned(),
                date: parse_date(date)?,
                category_id,
            }
            .into_expense(id, category))
        })
        .collect()
}
