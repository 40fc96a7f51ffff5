//! The command line surface: argument parsing and text rendering.

use std::{path::PathBuf, sync::OnceLock};

use clap::{Parser, Subcommand};
use numfmt::{Formatter, Precision};
use time::Month;

use crate::{
    Error,
    expense::{Expense, ExpenseId},
    service::ExpenseService,
    store::ExpenseStore,
};

/// A personal expense tracker for the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File path to the JSON expense store.
    #[arg(long, global = true, default_value = "expenses.json")]
    pub file: PathBuf,

    /// Canonical timezone used to date new expenses, e.g. "Asia/Jakarta".
    /// Defaults to UTC.
    #[arg(long, global = true, env = "OUTLAY_TZ")]
    pub timezone: Option<String>,

    /// The command to run. Running without one prints this usage text.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The expense commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new expense dated today.
    Add {
        /// A text description of what the money was spent on.
        #[arg(long)]
        description: String,

        /// The amount of money spent. Must not be negative.
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },

    /// List all recorded expenses.
    List,

    /// Delete an expense.
    Delete {
        /// The ID of the expense to delete.
        #[arg(long)]
        id: ExpenseId,
    },

    /// Change the description and/or amount of an expense.
    Update {
        /// The ID of the expense to update.
        #[arg(long)]
        id: ExpenseId,

        /// The new description. Omit to keep the current one.
        #[arg(long)]
        description: Option<String>,

        /// The new amount. Omit to keep the current one.
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
    },

    /// Show the total amount spent.
    Summary {
        /// A month from 1 to 12. Counts only expenses from that month of
        /// the current year.
        #[arg(long)]
        month: Option<u8>,
    },
}

/// Execute `command` against `service` and print its output to stdout.
pub fn run<S: ExpenseStore>(command: Command, service: &ExpenseService<S>) -> Result<(), Error> {
    match command {
        Command::Add {
            description,
            amount,
        } => {
            let expense = service.add(&description, amount)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }
        Command::List => {
            let expenses = service.list()?;
            print!("{}", render_table(&expenses));
        }
        Command::Delete { id } => {
            service.delete(id)?;
            println!("Expense deleted successfully");
        }
        Command::Update {
            id,
            description,
            amount,
        } => {
            service.update(id, description.as_deref(), amount)?;
            println!("Expense updated successfully");
        }
        Command::Summary { month } => {
            let month = month
                .map(|month| Month::try_from(month).map_err(|_| Error::InvalidMonth(month)))
                .transpose()?;
            let total = service.summary(month.map(u8::from))?;
            println!("{}", render_summary(month, total));
        }
    }

    Ok(())
}

fn render_summary(month: Option<Month>, total: f64) -> String {
    match month {
        Some(month) => format!("Total expenses for {month}: {}", currency(total)),
        None => format!("Total expenses: {}", currency(total)),
    }
}

fn render_table(expenses: &[Expense]) -> String {
    let mut output = String::from("ID   Date        Description                     Amount\n");

    for expense in expenses {
        output.push_str(&format!(
            "{:<4} {:<10}  {:<30} {}\n",
            expense.id,
            expense.date,
            expense.description,
            whole_currency(expense.amount),
        ));
    }

    output
}

/// Format `amount` as a currency string with two decimal places, e.g.
/// `$1,234.50`.
fn currency(amount: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if amount == 0.0 {
        // Zero is hardcoded as "0", so the formatted string is spelled out.
        return "$0.00".to_owned();
    }

    let mut formatted = fmt.fmt_string(amount);

    // numfmt drops trailing zeros, rendering 12.3 as "$12.3" and 12.0 as
    // "$12", so the missing decimals are restored here.
    match formatted.find('.') {
        None => formatted.push_str(".00"),
        Some(index) if formatted.len() - index == 2 => formatted.push('0'),
        Some(_) => {}
    }

    formatted
}

/// Format `amount` without decimal places for the expense listing, e.g.
/// `$1,234`.
fn whole_currency(amount: f64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if amount == 0.0 {
        return "$0".to_owned();
    }

    fmt.fmt_string(amount)
}


#[cfg(test)]
mod command_tests {
    use tempfile::TempDir;
    use time::UtcOffset;

    use super::{Command, run};
    use crate::{
        Error,
        service::ExpenseService,
        store::{ExpenseStore, JsonExpenseStore},
    };

    fn get_test_service() -> (TempDir, ExpenseService<JsonExpenseStore>) {
        let temp_dir = tempfile::tempdir().expect("Could not create temp dir");
        let store = JsonExpenseStore::new(temp_dir.path().join("expenses.json"));
        store.initialize().expect("Could not initialize store");

        (temp_dir, ExpenseService::new(store, UtcOffset::UTC))
    }

    #[test]
    fn summary_command_rejects_month_out_of_range() {
        let (_temp_dir, service) = get_test_service();

        let result = run(Command::Summary { month: Some(13) }, &service);

        assert_eq!(result, Err(Error::InvalidMonth(13)));
    }
}
