//! Outlay is a command line tool for tracking personal expenses.
//!
//! Expenses live in a single JSON file. The [cli] module defines the command
//! surface, [service::ExpenseService] implements the operations on top of it,
//! and [store::JsonExpenseStore] persists the collection as a whole.

#![warn(missing_docs)]

pub mod cli;
mod error;
mod expense;
pub mod service;
pub mod store;
pub mod timezone;

pub use error::Error;
pub use expense::{Expense, ExpenseId};
