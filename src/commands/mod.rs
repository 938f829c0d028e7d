//! Command handlers for the contratos CLI.
//!
//! Each handler runs one query against the [`crate::Ledger`] and returns an
//! [`Out`] carrying a printable message plus the structured result.

mod budgets;
mod contracts;
mod dashboard;
mod suppliers;
mod transactions;

use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

pub use budgets::budgets;
pub use contracts::contracts;
pub use dashboard::dashboard;
pub use suppliers::suppliers;
pub use transactions::transactions;

/// The output type for a command: a consistent message for the terminal
/// and, optionally, structured data for machine consumers.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of
    /// the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists)
    /// as JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// "1 contract" / "5 contracts" style counting for messages.
fn counted(count: usize, singular: &str, plural: &str) -> String {
    format!(
        "{count} {}",
        if count == 1 { singular } else { plural }
    )
}
