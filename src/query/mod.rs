//! Derived views over the entity stores: filtering and aggregation.
//!
//! Everything in this module is a pure function over the collections it is
//! given; nothing here mutates or retains store data.

mod filter;
mod summary;

pub use filter::{
    filter_contracts, filter_dotacoes, filter_suppliers, filter_transactions, BudgetFilter,
    ContractFilter, SupplierFilter, TransactionFilter, TransactionTab, ViewMode,
};
pub use summary::{
    budget_history, budget_metrics, contract_financial_summary, dashboard_metrics,
    financial_metrics, in_fiscal_year, recent_payments, transactions_by_contract, BudgetMetrics,
    DashboardMetrics, FinancialMetrics, FinancialSummary,
};
