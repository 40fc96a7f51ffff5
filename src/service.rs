//! Implements the expense operations: add, list, update, delete and summary.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    expense::{Expense, ExpenseId},
    store::ExpenseStore,
};

/// Implements the expense-tracking operations on top of an [ExpenseStore].
///
/// Every mutating operation loads the full collection, modifies it in memory
/// and saves the whole collection back. Operations never hold records beyond
/// their own scope.
pub struct ExpenseService<S: ExpenseStore> {
    store: S,
    utc_offset: UtcOffset,
}

impl<S: ExpenseStore> ExpenseService<S> {
    /// Create a service that reads and writes expenses through `store`.
    ///
    /// `utc_offset` determines what "today" means when dating new expenses
    /// and when pinning month summaries to the current year.
    pub fn new(store: S, utc_offset: UtcOffset) -> Self {
        Self { store, utc_offset }
    }

    fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.utc_offset).date()
    }

    /// Record a new expense dated today and return the stored record.
    ///
    /// IDs are assigned as one more than the largest existing ID, or 1 for
    /// an empty store. IDs freed up by deletions below the maximum are never
    /// handed out again.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription], [Error::NegativeAmount] or
    /// [Error::NonFiniteAmount] if the input is invalid. Nothing is written
    /// in that case.
    pub fn add(&self, description: &str, amount: f64) -> Result<Expense, Error> {
        validate_description(description)?;
        validate_amount(amount)?;

        let mut expenses = self.store.load()?;
        let expense = Expense {
            id: next_id(&expenses),
            date: self.today(),
            description: description.to_owned(),
            amount,
        };
        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        Ok(expense)
    }

    /// All expenses in stored (insertion) order, with exact amounts.
    /// Display formatting is left to the caller.
    pub fn list(&self) -> Result<Vec<Expense>, Error> {
        self.store.load()
    }

    /// Delete the expense with `id` and report whether a record was removed.
    ///
    /// A delete that matches nothing is a no-op: the collection is rewritten
    /// as-is and `Ok(false)` is returned rather than an error. Surviving
    /// records keep their order and IDs.
    pub fn delete(&self, id: ExpenseId) -> Result<bool, Error> {
        let mut expenses = self.store.load()?;
        let count_before = expenses.len();
        expenses.retain(|expense| expense.id != id);
        let removed = expenses.len() < count_before;

        if !removed {
            tracing::warn!("delete matched no expense with ID {id}");
        }

        self.store.save(&expenses)?;

        Ok(removed)
    }

    /// Update the description and/or amount of the expense with `id`.
    ///
    /// Fields given as `None` are left unchanged. The date is never
    /// editable.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense matches `id`, leaving the
    /// store untouched. Invalid field values are rejected with
    /// [Error::EmptyDescription], [Error::NegativeAmount] or
    /// [Error::NonFiniteAmount] before the store is read.
    pub fn update(
        &self,
        id: ExpenseId,
        description: Option<&str>,
        amount: Option<f64>,
    ) -> Result<Expense, Error> {
        if let Some(description) = description {
            validate_description(description)?;
        }
        if let Some(amount) = amount {
            validate_amount(amount)?;
        }

        let mut expenses = self.store.load()?;
        let Some(expense) = expenses.iter_mut().find(|expense| expense.id == id) else {
            return Err(Error::NotFound(id));
        };

        if let Some(description) = description {
            expense.description = description.to_owned();
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        let updated = expense.clone();

        self.store.save(&expenses)?;

        Ok(updated)
    }

    /// The total amount spent, optionally filtered to one month.
    ///
    /// With a month given (1-12), only expenses from that month of the
    /// *current* year are counted: an expense from the same month of a past
    /// year is excluded. The year is pinned to now rather than taken from
    /// the record, a long-standing behavior of the tracker that callers
    /// rely on.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is outside of 1-12.
    pub fn summary(&self, month: Option<u8>) -> Result<f64, Error> {
        if let Some(month) = month
            && !(1..=12).contains(&month)
        {
            return Err(Error::InvalidMonth(month));
        }

        let current_year = self.today().year();
        let total = self
            .store
            .load()?
            .iter()
            .filter(|expense| match month {
                None => true,
                Some(month) => {
                    u8::from(expense.date.month()) == month
                        && expense.date.year() == current_year
                }
            })
            .map(|expense| expense.amount)
            .sum();

        Ok(total)
    }
}

fn next_id(expenses: &[Expense]) -> ExpenseId {
    expenses.iter().map(|expense| expense.id).max().unwrap_or(0) + 1
}

fn validate_description(description: &str) -> Result<(), Error> {
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    Ok(())
}

fn validate_amount(amount: f64) -> Result<(), Error> {
    // serde_json writes non-finite floats as null, which the next load
    // would reject as corrupt.
    if !amount.is_finite() {
        return Err(Error::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(Error::NegativeAmount(amount));
    }

    Ok(())
}
