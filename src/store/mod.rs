//! Defines the expense store trait and its implementations.

mod json;

pub use json::JsonExpenseStore;

use crate::{Error, expense::Expense};

/// Handles durable persistence of the expense collection as a whole.
///
/// Every mutation in the application is a whole-collection rewrite: callers
/// load the full collection, modify it in memory, then save it back. No
/// locking is provided, so concurrent processes writing to the same store
/// can lose updates (last save wins).
pub trait ExpenseStore {
    /// Ensure a persisted collection exists, creating an empty one if none
    /// is present. Safe to call on every invocation.
    fn initialize(&self) -> Result<(), Error>;

    /// Read and deserialize the full persisted collection.
    ///
    /// # Errors
    /// Returns [Error::StorageCorrupt] if the persisted content is not a
    /// valid expense collection, or [Error::StorageUnavailable] if the
    /// medium cannot be read.
    fn load(&self) -> Result<Vec<Expense>, Error>;

    /// Serialize and write the entire collection, replacing prior content.
    /// No partially written state is ever visible to a subsequent load.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the collection cannot be
    /// written.
    fn save(&self, expenses: &[Expense]) -> Result<(), Error>;
}
