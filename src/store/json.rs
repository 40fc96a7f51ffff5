//! A whole-file JSON implementation of the expense store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Error, expense::Expense, store::ExpenseStore};

/// Stores the expense collection as a single pretty-printed JSON document.
///
/// Saves go through a sibling temporary file that is renamed over the
/// target, so a failed write never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    /// Create a store that persists to the file at `path`.
    ///
    /// The file is not touched until [ExpenseStore::initialize] or one of
    /// the other store operations runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replace_content(&self, content: &str) -> Result<(), Error> {
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, content)
            .map_err(|error| Error::StorageUnavailable(error.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|error| Error::StorageUnavailable(error.to_string()))
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn initialize(&self) -> Result<(), Error> {
        let exists = self
            .path
            .try_exists()
            .map_err(|error| Error::StorageUnavailable(error.to_string()))?;

        if exists {
            return Ok(());
        }

        tracing::debug!("creating empty expense store at {:?}", self.path);
        self.replace_content("[]")
    }

    fn load(&self) -> Result<Vec<Expense>, Error> {
        let content = fs::read_to_string(&self.path)
            .map_err(|error| Error::StorageUnavailable(error.to_string()))?;

        serde_json::from_str(&content).map_err(|error| Error::StorageCorrupt(error.to_string()))
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), Error> {
        let content = serde_json::to_string_pretty(expenses)
            .map_err(|error| Error::StorageUnavailable(error.to_string()))?;

        tracing::debug!("rewriting {} expense(s) to {:?}", expenses.len(), self.path);
        self.replace_content(&content)
    }
}
