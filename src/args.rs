//! These structs provide the CLI interface for the contratos CLI.

use crate::model::{ContractStatus, SupplierStatus, TransactionType};
use crate::query::{
    BudgetFilter, ContractFilter, SupplierFilter, TransactionFilter, TransactionTab, ViewMode,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// contratos: query the contract/budget dashboard dataset from the command line.
///
/// Loads a JSON dataset (or the built-in sample data when --data is not
/// given) into an in-memory ledger and renders the dashboard or a filtered
/// view of one of the entity collections. All transaction-derived numbers
/// are scoped to the selected fiscal year (--ano, defaulting to the current
/// year).
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// Path to a JSON dataset file. When absent, the built-in sample
    /// dataset is used.
    #[arg(long, env = "CONTRATOS_DATA")]
    data: Option<PathBuf>,

    /// The fiscal year ("ano de exercício") scoping transaction views.
    /// Defaults to the current year.
    #[arg(long, env = "CONTRATOS_ANO")]
    ano: Option<i32>,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data(&self) -> Option<&PathBuf> {
        self.data.as_ref()
    }

    pub fn ano(&self) -> Option<i32> {
        self.ano
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the dashboard metrics for the selected fiscal year.
    Dashboard,
    /// List contracts, optionally filtered.
    Contracts(ContractsArgs),
    /// List budget allocations (dotações), optionally filtered.
    Budgets(BudgetsArgs),
    /// List fiscal-year transactions, optionally filtered.
    Transactions(TransactionsArgs),
    /// List suppliers, optionally filtered.
    Suppliers(SuppliersArgs),
}

/// Filters for the `contracts` subcommand.
#[derive(Debug, Parser, Clone, Default)]
pub struct ContractsArgs {
    /// Free text matched against number, supplier and status label.
    #[arg(long, default_value = "")]
    search: String,

    /// Which tab to show when no --status is given: active or history.
    #[arg(long, default_value_t)]
    view: ViewMode,

    /// Effective status(es) to keep, e.g. VIGENTE. Repeatable; overrides
    /// --view when present.
    #[arg(long = "status")]
    statuses: Vec<ContractStatus>,

    /// Substring match on the supplier name.
    #[arg(long, default_value = "")]
    supplier: String,

    /// Substring match on the contract number.
    #[arg(long, default_value = "")]
    number: String,
}

impl ContractsArgs {
    pub fn filter(&self) -> ContractFilter {
        ContractFilter {
            search: self.search.clone(),
            view: self.view,
            statuses: self.statuses.clone(),
            supplier: self.supplier.clone(),
            number: self.number.clone(),
        }
    }
}

/// Filters for the `budgets` subcommand.
#[derive(Debug, Parser, Clone, Default)]
pub struct BudgetsArgs {
    /// Free text matched against description, linked contract and SEI ref.
    #[arg(long, default_value = "")]
    search: String,

    /// Budget unit: FADEP or DEFENSORIA.
    #[arg(long)]
    unit: Option<crate::model::BudgetUnit>,

    /// Keep only allocations with no balance remaining.
    #[arg(long)]
    no_balance: bool,

    /// Keep only allocations with balance below this value.
    #[arg(long)]
    below: Option<crate::model::Amount>,
}

impl BudgetsArgs {
    pub fn filter(&self) -> BudgetFilter {
        BudgetFilter {
            search: self.search.clone(),
            unit: self.unit,
            no_balance: self.no_balance,
            below: self.below,
        }
    }
}

/// Filters for the `transactions` subcommand.
#[derive(Debug, Parser, Clone, Default)]
pub struct TransactionsArgs {
    /// Tab: all, payments or commitments.
    #[arg(long, default_value_t)]
    tab: TransactionTab,

    /// Exact transaction type, e.g. LIQUIDATION.
    #[arg(long = "type")]
    kind: Option<TransactionType>,

    /// Substring match on the contract number reference.
    #[arg(long, default_value = "")]
    contract: String,

    /// Substring match on the commitment note reference.
    #[arg(long, default_value = "")]
    commitment: String,

    /// Inclusive start date (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Free text over description and references.
    #[arg(long, default_value = "")]
    search: String,
}

impl TransactionsArgs {
    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            tab: self.tab,
            kind: self.kind,
            contract: self.contract.clone(),
            commitment: self.commitment.clone(),
            from: self.from,
            to: self.to,
            search: self.search.clone(),
        }
    }
}

/// Filters for the `suppliers` subcommand.
#[derive(Debug, Parser, Clone, Default)]
pub struct SuppliersArgs {
    /// Free text over name, trade name and tax id.
    #[arg(long, default_value = "")]
    search: String,

    /// Exact status, e.g. ACTIVE. Omit for all.
    #[arg(long)]
    status: Option<SupplierStatus>,
}

impl SuppliersArgs {
    pub fn filter(&self) -> SupplierFilter {
        SupplierFilter {
            search: self.search.clone(),
            status: self.status,
        }
    }
}
