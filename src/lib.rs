//! In-memory data and query core for a public procurement contract and
//! budget dashboard.
//!
//! The library owns four entity collections (contracts, dotações,
//! transactions, suppliers) plus a selectable fiscal year, and derives
//! everything else on demand: effective contract statuses, budget balances,
//! per-contract and dashboard-wide financial aggregates, and filtered views
//! of each collection. The [`Ledger`] is the single entry point.

pub mod args;
pub mod commands;
mod error;
mod ledger;
pub mod model;
pub mod query;
mod sample;
mod store;
mod utils;

pub use error::Error;
pub use error::Result;
pub use ledger::{Ledger, AVAILABLE_YEARS};
pub use store::{BudgetStore, ContractStore, SupplierStore, TransactionStore};
