use chrono::Local;
use clap::Parser;
use contratos::args::{Args, Command};
use contratos::model::Dataset;
use contratos::{commands, Ledger, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let today = Local::now().date_naive();

    let dataset = match args.common().data() {
        Some(path) => Dataset::load(path)?,
        None => Dataset::sample(today),
    };
    let mut ledger = Ledger::new(dataset, today);
    if let Some(ano) = args.common().ano() {
        ledger.set_fiscal_year(ano);
    }

    let _: () = match args.command() {
        Command::Dashboard => commands::dashboard(&ledger).print(),
        Command::Contracts(contract_args) => commands::contracts(&ledger, contract_args).print(),
        Command::Budgets(budget_args) => commands::budgets(&ledger, budget_args).print(),
        Command::Transactions(transaction_args) => {
            commands::transactions(&ledger, transaction_args).print()
        }
        Command::Suppliers(supplier_args) => commands::suppliers(&ledger, supplier_args).print(),
    };
    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
