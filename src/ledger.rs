//! The ledger: entity stores plus the fiscal year context, behind one
//! query/mutation surface.

use crate::model::{
    days_remaining, Amount, Contract, ContractStatus, Dataset, Dotacao, Supplier, SupplierUpdate,
    Transaction,
};
use crate::query::{
    self, BudgetFilter, ContractFilter, DashboardMetrics, FinancialSummary, SupplierFilter,
    TransactionFilter,
};
use crate::store::{BudgetStore, ContractStore, SupplierStore, TransactionStore};
use crate::Result;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Fiscal years selectable in the year picker.
pub const AVAILABLE_YEARS: [i32; 4] = [2024, 2025, 2026, 2027];

/// Owns the four entity stores and the fiscal year context.
///
/// All derived values (effective statuses, balances, aggregates, filtered
/// views) are recomputed from current state on every read, so a write is
/// always visible to the next read. Observation is by polling: every
/// mutation, including a fiscal year change, advances [`Ledger::generation`].
///
/// `today` is injected at construction so date-derived state is
/// deterministic and testable.
#[derive(Debug, Clone)]
pub struct Ledger {
    contracts: ContractStore,
    dotacoes: BudgetStore,
    transactions: TransactionStore,
    suppliers: SupplierStore,
    fiscal_year: i32,
    year_changes: u64,
    today: NaiveDate,
}

impl Ledger {
    /// Creates a ledger over `dataset`. The fiscal year starts at the year
    /// of `today`.
    pub fn new(dataset: Dataset, today: NaiveDate) -> Self {
        debug!(
            contracts = dataset.contracts.len(),
            dotacoes = dataset.dotacoes.len(),
            transactions = dataset.transactions.len(),
            suppliers = dataset.suppliers.len(),
            "Loading dataset"
        );
        Self {
            contracts: ContractStore::new(dataset.contracts),
            dotacoes: BudgetStore::new(dataset.dotacoes),
            transactions: TransactionStore::new(dataset.transactions),
            suppliers: SupplierStore::new(dataset.suppliers),
            fiscal_year: today.year(),
            year_changes: 0,
            today,
        }
    }

    /// Creates a ledger over the built-in sample dataset.
    pub fn sample(today: NaiveDate) -> Self {
        Self::new(Dataset::sample(today), today)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn fiscal_year(&self) -> i32 {
        self.fiscal_year
    }

    /// Selects the fiscal year scoping all transaction-derived values.
    pub fn set_fiscal_year(&mut self, year: i32) {
        if year != self.fiscal_year {
            debug!("Fiscal year changed from {} to {year}", self.fiscal_year);
            self.fiscal_year = year;
            self.year_changes += 1;
        }
    }

    /// A value that increases on every mutation, fiscal year changes
    /// included. Presentation re-reads its snapshots when it sees a new
    /// generation.
    pub fn generation(&self) -> u64 {
        self.contracts.generation()
            + self.dotacoes.generation()
            + self.transactions.generation()
            + self.suppliers.generation()
            + self.year_changes
    }

    // ----- snapshots and lookups -----

    pub fn contracts(&self) -> &[Contract] {
        self.contracts.snapshot()
    }

    pub fn dotacoes(&self) -> &[Dotacao] {
        self.dotacoes.snapshot()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.snapshot()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        self.suppliers.snapshot()
    }

    pub fn contract_by_id(&self, id: &str) -> Option<&Contract> {
        self.contracts.get(id)
    }

    pub fn dotacao_by_id(&self, id: &str) -> Option<&Dotacao> {
        self.dotacoes.get(id)
    }

    pub fn supplier_by_id(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    // ----- calculators -----

    /// Days until the contract's end date, negative when past due.
    pub fn days_remaining(&self, contract: &Contract) -> i64 {
        days_remaining(contract.end_date, self.today)
    }

    /// The status every view should display for `contract`.
    pub fn effective_status(&self, contract: &Contract) -> ContractStatus {
        contract.effective_status(self.days_remaining(contract))
    }

    /// Remaining balance of a dotação; may be negative.
    pub fn budget_balance(&self, dotacao: &Dotacao) -> Amount {
        dotacao.balance()
    }

    // ----- aggregation -----

    /// Paid/committed totals for the contract with the given number, scoped
    /// to the current fiscal year.
    pub fn contract_financial_summary(&self, contract_number: &str) -> FinancialSummary {
        query::contract_financial_summary(
            self.transactions.snapshot(),
            contract_number,
            self.fiscal_year,
        )
    }

    /// Fiscal-year transactions of one contract, matched by number.
    pub fn transactions_by_contract(&self, contract_number: &str) -> Vec<Transaction> {
        query::transactions_by_contract(
            self.transactions.snapshot(),
            contract_number,
            self.fiscal_year,
        )
    }

    /// Fiscal-year transaction history of a dotação, chronological.
    pub fn budget_history(&self, dotacao: &Dotacao) -> Vec<Transaction> {
        query::budget_history(self.transactions.snapshot(), dotacao, self.fiscal_year)
    }

    /// Allocations linked to a contract id, in store order.
    pub fn dotacoes_by_contract(&self, contract_id: &str) -> Vec<Dotacao> {
        self.dotacoes
            .snapshot()
            .iter()
            .filter(|d| d.contract_id == contract_id)
            .cloned()
            .collect()
    }

    /// All dashboard metrics for the current fiscal year.
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        query::dashboard_metrics(
            self.contracts.snapshot(),
            self.dotacoes.snapshot(),
            self.transactions.snapshot(),
            self.fiscal_year,
            self.today,
        )
    }

    // ----- filtered views -----

    pub fn filter_contracts(&self, filter: &ContractFilter) -> Vec<Contract> {
        query::filter_contracts(self.contracts.snapshot(), filter, self.today)
    }

    pub fn filter_dotacoes(&self, filter: &BudgetFilter) -> Vec<Dotacao> {
        query::filter_dotacoes(self.dotacoes.snapshot(), self.contracts.snapshot(), filter)
    }

    /// Filters the fiscal-year-visible transactions.
    pub fn filter_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let visible: Vec<Transaction> =
            query::in_fiscal_year(self.transactions.snapshot(), self.fiscal_year)
                .cloned()
                .collect();
        query::filter_transactions(&visible, filter)
    }

    pub fn filter_suppliers(&self, filter: &SupplierFilter) -> Vec<Supplier> {
        query::filter_suppliers(self.suppliers.snapshot(), filter)
    }

    /// Contracts belonging to a supplier, joined by name (see
    /// [`Supplier::matches_contract`]).
    pub fn linked_contracts(&self, supplier: &Supplier) -> Vec<Contract> {
        self.contracts
            .snapshot()
            .iter()
            .filter(|c| supplier.matches_contract(c))
            .cloned()
            .collect()
    }

    // ----- mutations -----

    pub fn add_supplier(&mut self, supplier: Supplier) {
        self.suppliers.push(supplier);
    }

    /// Applies a partial update to a supplier; errors when the id is
    /// unknown.
    pub fn update_supplier(&mut self, id: &str, update: &SupplierUpdate) -> Result<()> {
        self.suppliers.update(id, update)
    }
}
