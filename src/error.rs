//! Defines the crate level error type.

use crate::expense::ExpenseId;

/// The errors that may occur in the ledger.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A month string was not in the "YYYY-MM" format.
    ///
    /// The original string is included so that callers can report it back.
    #[error("\"{0}\" is not a valid month, expected the format YYYY-MM")]
    InvalidMonth(String),

    /// A date string was not in the "YYYY-MM-DD" format.
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDate(String),

    /// Tried to update an expense that is not in the ledger.
    #[error("tried to update expense {0} which is not in the ledger")]
    ExpenseNotFound(ExpenseId),

    /// Every expense ID has been used, so no more expenses can be recorded.
    #[error("no expense IDs are left to assign")]
    ExpenseIdsExhausted,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The seed file could not be read or parsed.
    #[error("could not load seed file: {0}")]
    SeedFile(String),
}
