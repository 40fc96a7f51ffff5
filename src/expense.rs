//! Defines the expense record, the core type of the application.

use serde::{Deserialize, Serialize};
use time::Date;

/// Alias for the integer type used for expense IDs.
pub type ExpenseId = i64;

/// A single tracked spending entry.
///
/// IDs are assigned by [crate::service::ExpenseService::add] and are never
/// supplied by the user; the date is fixed at creation time and cannot be
/// edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense. Positive and unique within the store.
    pub id: ExpenseId,
    /// The calendar date the expense was recorded on.
    pub date: Date,
    /// A text description of what the money was spent on.
    pub description: String,
    /// The amount of money spent.
    pub amount: f64,
}
