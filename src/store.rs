//! Entity stores.
//!
//! Each store is the sole owner and sole mutator of its collection. Reads
//! hand out immutable snapshots; every mutation bumps a generation counter
//! so observers can poll for changes without the stores pushing
//! notifications anywhere.

use crate::model::{Contract, Dotacao, Supplier, SupplierUpdate, Transaction};
use crate::Result;
use anyhow::bail;

/// Owns the contract collection.
#[derive(Debug, Clone, Default)]
pub struct ContractStore {
    rows: Vec<Contract>,
    generation: u64,
}

impl ContractStore {
    pub fn new(rows: Vec<Contract>) -> Self {
        Self { rows, generation: 0 }
    }

    /// Current snapshot, in insertion order.
    pub fn snapshot(&self) -> &[Contract] {
        &self.rows
    }

    pub fn get(&self, id: &str) -> Option<&Contract> {
        self.rows.iter().find(|c| c.id == id)
    }

    pub fn push(&mut self, contract: Contract) {
        self.rows.push(contract);
        self.generation += 1;
    }

    /// Replaces the contract with the same id.
    pub fn update(&mut self, contract: Contract) -> Result<()> {
        match self.rows.iter_mut().find(|c| c.id == contract.id) {
            Some(existing) => {
                *existing = contract;
                self.generation += 1;
                Ok(())
            }
            None => bail!("Contract not found: {}", contract.id),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the dotação collection.
#[derive(Debug, Clone, Default)]
pub struct BudgetStore {
    rows: Vec<Dotacao>,
    generation: u64,
}

impl BudgetStore {
    pub fn new(rows: Vec<Dotacao>) -> Self {
        Self { rows, generation: 0 }
    }

    pub fn snapshot(&self) -> &[Dotacao] {
        &self.rows
    }

    pub fn get(&self, id: &str) -> Option<&Dotacao> {
        self.rows.iter().find(|d| d.id == id)
    }

    pub fn push(&mut self, dotacao: Dotacao) {
        self.rows.push(dotacao);
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the transaction collection. Transactions are immutable once loaded;
/// the store only supports appending.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    rows: Vec<Transaction>,
    generation: u64,
}

impl TransactionStore {
    pub fn new(rows: Vec<Transaction>) -> Self {
        Self { rows, generation: 0 }
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.rows.iter().find(|t| t.id == id)
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.rows.push(transaction);
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the supplier collection.
#[derive(Debug, Clone, Default)]
pub struct SupplierStore {
    rows: Vec<Supplier>,
    generation: u64,
}

impl SupplierStore {
    pub fn new(rows: Vec<Supplier>) -> Self {
        Self { rows, generation: 0 }
    }

    pub fn snapshot(&self) -> &[Supplier] {
        &self.rows
    }

    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.rows.iter().find(|s| s.id == id)
    }

    pub fn push(&mut self, supplier: Supplier) {
        self.rows.push(supplier);
        self.generation += 1;
    }

    /// Applies a partial update to the supplier with the given id.
    pub fn update(&mut self, id: &str, update: &SupplierUpdate) -> Result<()> {
        match self.rows.iter_mut().find(|s| s.id == id) {
            Some(supplier) => {
                update.apply(supplier);
                self.generation += 1;
                Ok(())
            }
            None => bail!("Supplier not found: {id}"),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SupplierStatus;
    use crate::test::{fixture_dataset, supplier_fixture};

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let store = ContractStore::new(fixture_dataset().contracts);
        let ids: Vec<&str> = store.snapshot().iter().map(|c| c.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| id.parse::<u32>().unwrap());
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_get_by_id() {
        let store = ContractStore::new(fixture_dataset().contracts);
        assert_eq!(store.get("3").unwrap().number, "074/2025");
        assert!(store.get("999").is_none());
    }

    #[test]
    fn test_push_bumps_generation() {
        let mut store = SupplierStore::new(vec![]);
        assert_eq!(store.generation(), 0);
        store.push(supplier_fixture());
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_supplier_update_bumps_generation() {
        let mut store = SupplierStore::new(vec![supplier_fixture()]);
        let update = SupplierUpdate {
            status: Some(SupplierStatus::Inactive),
            ..SupplierUpdate::default()
        };
        store.update("s1", &update).unwrap();
        assert_eq!(store.generation(), 1);
        assert_eq!(store.get("s1").unwrap().status, SupplierStatus::Inactive);
    }

    #[test]
    fn test_supplier_update_unknown_id_fails_without_mutation() {
        let mut store = SupplierStore::new(vec![supplier_fixture()]);
        let update = SupplierUpdate::default();
        let err = store.update("missing", &update).unwrap_err();
        assert!(err.to_string().contains("Supplier not found"));
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn test_contract_update_replaces_row() {
        let mut store = ContractStore::new(fixture_dataset().contracts);
        let mut contract = store.get("2").unwrap().clone();
        contract.supplier_name = "Renamed Ltda".to_string();
        store.update(contract).unwrap();
        assert_eq!(store.get("2").unwrap().supplier_name, "Renamed Ltda");
        assert_eq!(store.generation(), 1);
    }
}
