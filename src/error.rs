//! Defines the app level error type.

use crate::expense::ExpenseId;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for an expense description.
    #[error("the expense description must not be empty")]
    EmptyDescription,

    /// A negative amount was used to create or update an expense.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// A NaN or infinite amount was used to create or update an expense.
    /// Non-finite values have no JSON representation, so accepting one
    /// would corrupt the store.
    #[error("the amount must be a finite number")]
    NonFiniteAmount,

    /// A month outside of 1-12 was used to filter the summary.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// The referenced expense does not exist in the store.
    #[error("no expense with ID {0} could be found")]
    NotFound(ExpenseId),

    /// The expense file could not be read or written.
    #[error("the expense file could not be accessed: {0}")]
    StorageUnavailable(String),

    /// The expense file exists but does not contain a valid expense
    /// collection.
    #[error("the expense file could not be parsed: {0}")]
    StorageCorrupt(String),

    /// An unknown canonical timezone name was given.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}
