//! Types that represent the core data model, such as `Contract` and `Dotacao`.
mod amount;
mod budget;
mod contract;
mod supplier;
mod transaction;

pub use amount::{Amount, AmountError};
pub use budget::{BudgetUnit, Dotacao};
pub use contract::{days_remaining, Contract, ContractStatus};
use serde::{Deserialize, Serialize};
pub use supplier::{Supplier, SupplierStatus, SupplierUpdate};
pub use transaction::{Transaction, TransactionType};

use crate::Result;
use std::path::Path;

/// All four entity collections, as loaded into the [`crate::Ledger`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Dataset {
    pub contracts: Vec<Contract>,
    pub dotacoes: Vec<Dotacao>,
    pub transactions: Vec<Transaction>,
    pub suppliers: Vec<Supplier>,
}

impl Dataset {
    /// Loads a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        crate::utils::deserialize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixture_dataset;

    #[test]
    fn test_load_round_trips_through_a_file() {
        let dataset = fixture_dataset();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, serde_json::to_string_pretty(&dataset).unwrap()).unwrap();

        let loaded = Dataset::load(&path).unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Dataset::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
