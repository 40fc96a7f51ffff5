//! The `outlay` binary: one expense command per invocation.

use std::{path::PathBuf, process::ExitCode};

use clap::{CommandFactory, Parser};
use time::UtcOffset;
use tracing_subscriber::EnvFilter;

use outlay::{
    Error,
    cli::{Cli, Command, run},
    service::ExpenseService,
    store::{ExpenseStore, JsonExpenseStore},
    timezone::get_local_offset,
};

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command prints the usage text and reports success.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match execute(cli.file, cli.timezone.as_deref(), command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn execute(file: PathBuf, timezone: Option<&str>, command: Command) -> Result<(), Error> {
    let utc_offset = match timezone {
        Some(name) => get_local_offset(name)?,
        None => UtcOffset::UTC,
    };

    let store = JsonExpenseStore::new(file);
    store.initialize()?;

    let service = ExpenseService::new(store, utc_offset);

    run(command, &service)
}

fn setup_logging() {
    // Log output goes to stderr so command output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
