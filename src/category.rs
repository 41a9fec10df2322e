//! This file defines the `Category` type and the categories the ledger is seeded with.
//! A category is a spending bucket with a monthly budget limit.

use serde::{Deserialize, Serialize};

/// Alias for the integer type used for category IDs.
pub type CategoryId = i64;

/// The colour used for expenses whose category could not be found.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// The name used for expenses whose category could not be found.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// A spending bucket, e.g., 'Groceries', 'Rent', 'Utilities'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,

    /// The display name of the category.
    pub name: String,

    /// The display colour of the category as a hex string, e.g. "#22c55e".
    pub color: String,

    /// How much may be spent in this category each month.
    ///
    /// A limit of zero means the category has no budget, see
    /// [percent_used](crate::percent_used).
    pub monthly_limit: f64,

    /// A short description of what the category is for.
    #[serde(default)]
    pub description: String,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: CategoryId,
        name: &str,
        color: &str,
        monthly_limit: f64,
        description: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            color: color.to_owned(),
            monthly_limit,
            description: description.to_owned(),
        }
    }
}

/// The categories a fresh ledger starts with.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Groceries", "#22c55e", 300.0, "Food and household supplies"),
        Category::new(2, "Rent", "#3b82f6", 1200.0, "Monthly rent or mortgage"),
        Category::new(3, "Utilities", "#f59e0b", 150.0, "Electric, water, gas, internet"),
        Category::new(4, "Miscellaneous", "#6b7280", 200.0, "Other expenses"),
        Category::new(5, "Personal", "#8b5cf6", 250.0, "Personal care and entertainment"),
    ]
}
