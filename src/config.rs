//! Configuration and seed data used to construct a [Ledger](crate::Ledger).

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, seed_categories},
    expense::{Expense, ExpenseId, seed_expenses},
};

/// The timezone used when no timezone is configured.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Settings that control how the ledger behaves.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to decide which month is the current month.
    pub local_timezone: String,
}

impl LedgerConfig {
    /// Create a config for the timezone `local_timezone`.
    pub fn new(local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

/// The categories and expenses a ledger starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSeed {
    /// The spending categories, in display order.
    pub categories: Vec<Category>,
    /// The recorded expenses, in insertion order.
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl LedgerSeed {
    /// The built-in sample categories and December 2025 expenses.
    ///
    /// # Errors
    /// Returns an error only if the built-in data is malformed.
    pub fn builtin() -> Result<Self, Error> {
        let categories = seed_categories();
        let expenses = seed_expenses(&categories)?;

        Ok(Self {
            categories,
            expenses,
        })
    }

    /// Load a seed from the JSON file at `path`.
    ///
    /// # Errors
    /// Returns [Error::SeedFile] if the file cannot be read or is not a valid seed.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|error| Error::SeedFile(format!("{}: {error}", path.display())))?;

        Self::from_json(&text)
    }

    /// Parse a seed from a JSON string.
    ///
    /// # Errors
    /// Returns [Error::SeedFile] if `json` is not a valid seed.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let seed: Self =
            serde_json::from_str(json).map_err(|error| Error::SeedFile(error.to_string()))?;
        seed.validate()?;

        Ok(seed)
    }

    /// Check that category IDs and expense IDs are unique and that there is an ID left
    /// for the next expense.
    ///
    /// # Errors
    /// Returns [Error::SeedFile] describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(id) = first_duplicate(self.categories.iter().map(|category| category.id)) {
            return Err(Error::SeedFile(format!("duplicate category ID {id}")));
        }

        if let Some(id) = first_duplicate(self.expenses.iter().map(|expense| expense.id)) {
            return Err(Error::SeedFile(format!("duplicate expense ID {id}")));
        }

        self.next_expense_id().map(|_| ())
    }

    /// The ID to give the next expense, one more than the largest seeded expense ID.
    ///
    /// # Errors
    /// Returns [Error::SeedFile] if the largest seeded expense ID is [ExpenseId::MAX].
    pub(crate) fn next_expense_id(&self) -> Result<ExpenseId, Error> {
        let max_id = self
            .expenses
            .iter()
            .map(|expense| expense.id)
            .max()
            .unwrap_or(0);

        max_id
            .checked_add(1)
            .ok_or_else(|| Error::SeedFile(format!("expense ID {max_id} is too large")))
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = i64>) -> Option<i64> {
    let mut seen = HashSet::new();

    ids.find(|id| !seen.insert(*id))
}
