//! Filter/search engine.
//!
//! Each entity collection gets a criteria struct whose `Default` value
//! matches everything: an empty string means no text filter, `None` means no
//! bound, an empty set means no restriction. Active predicates are ANDed and
//! insertion order is preserved.

use crate::model::{
    days_remaining, Amount, BudgetUnit, Contract, ContractStatus, Dotacao, Supplier,
    SupplierStatus, Transaction, TransactionType,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which tab of the contracts view is active when no explicit status filter
/// is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Not rescinded and not past due.
    #[default]
    Active,
    /// Rescinded or past due.
    History,
}

serde_plain::derive_display_from_serialize!(ViewMode);
serde_plain::derive_fromstr_from_deserialize!(ViewMode);

/// Criteria for the contract view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContractFilter {
    /// Free text matched against number, supplier name and the effective
    /// status label.
    pub search: String,
    pub view: ViewMode,
    /// When non-empty, membership of the *effective* status in this set
    /// replaces the view-mode tab logic.
    pub statuses: Vec<ContractStatus>,
    pub supplier: String,
    pub number: String,
}

/// Applies `filter` to `contracts`. `today` anchors all date-derived state.
pub fn filter_contracts(
    contracts: &[Contract],
    filter: &ContractFilter,
    today: NaiveDate,
) -> Vec<Contract> {
    let query = filter.search.trim().to_lowercase();
    let supplier_query = filter.supplier.trim().to_lowercase();
    let number_query = filter.number.trim().to_lowercase();

    contracts
        .iter()
        .filter(|c| {
            let days = days_remaining(c.end_date, today);
            let effective = c.effective_status(days);

            let matches_status = if filter.statuses.is_empty() {
                let rescinded = c.status == ContractStatus::Rescindido;
                let past_due = days < 0;
                match filter.view {
                    ViewMode::Active => !rescinded && !past_due,
                    ViewMode::History => rescinded || past_due,
                }
            } else {
                filter.statuses.contains(&effective)
            };

            let matches_supplier =
                supplier_query.is_empty() || c.supplier_name.to_lowercase().contains(&supplier_query);
            let matches_number =
                number_query.is_empty() || c.number.to_lowercase().contains(&number_query);
            let matches_search = query.is_empty()
                || c.number.to_lowercase().contains(&query)
                || c.supplier_name.to_lowercase().contains(&query)
                || effective.to_string().to_lowercase().contains(&query);

            matches_status && matches_supplier && matches_number && matches_search
        })
        .cloned()
        .collect()
}

/// Criteria for the budget allocation view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BudgetFilter {
    /// Free text matched against description, linked contract supplier name
    /// and SEI reference.
    pub search: String,
    pub unit: Option<BudgetUnit>,
    /// Keep only allocations with no balance remaining (balance <= 0).
    pub no_balance: bool,
    /// Keep only allocations with balance strictly below this value.
    pub below: Option<Amount>,
}

/// Applies `filter` to `dotacoes`. The contract collection is needed for the
/// linked-supplier-name search term.
pub fn filter_dotacoes(
    dotacoes: &[Dotacao],
    contracts: &[Contract],
    filter: &BudgetFilter,
) -> Vec<Dotacao> {
    let query = filter.search.trim().to_lowercase();

    dotacoes
        .iter()
        .filter(|d| {
            let balance = d.balance();
            let contract_name = contracts
                .iter()
                .find(|c| c.id == d.contract_id)
                .map(|c| c.supplier_name.as_str())
                .unwrap_or_default();

            let matches_search = query.is_empty()
                || d.description.to_lowercase().contains(&query)
                || contract_name.to_lowercase().contains(&query)
                || d.sei_ref.to_lowercase().contains(&query);
            if !matches_search {
                return false;
            }

            if let Some(unit) = filter.unit {
                if d.unit != unit {
                    return false;
                }
            }
            if filter.no_balance && balance.is_positive() {
                return false;
            }
            if let Some(below) = filter.below {
                if balance >= below {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Tab selector for the transactions view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionTab {
    #[default]
    All,
    /// Liquidations only.
    Payments,
    /// Commitments only.
    Commitments,
}

serde_plain::derive_display_from_serialize!(TransactionTab);
serde_plain::derive_fromstr_from_deserialize!(TransactionTab);

/// Criteria for the transactions view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionFilter {
    pub tab: TransactionTab,
    pub kind: Option<TransactionType>,
    /// Substring match against the contract number reference.
    pub contract: String,
    /// Substring match against the commitment note reference.
    pub commitment: String,
    /// Inclusive lower date bound, at day granularity.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound, at day granularity.
    pub to: Option<NaiveDate>,
    /// Free text over description, contract reference, commitment reference
    /// and budget description.
    pub search: String,
}

/// Applies `filter` to `transactions`.
pub fn filter_transactions(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    let query = filter.search.trim().to_lowercase();
    let contract_query = filter.contract.trim().to_lowercase();
    let commitment_query = filter.commitment.trim().to_lowercase();

    transactions
        .iter()
        .filter(|t| {
            match filter.tab {
                TransactionTab::All => {}
                TransactionTab::Payments => {
                    if t.kind != TransactionType::Liquidation {
                        return false;
                    }
                }
                TransactionTab::Commitments => {
                    if t.kind != TransactionType::Commitment {
                        return false;
                    }
                }
            }
            if let Some(kind) = filter.kind {
                if t.kind != kind {
                    return false;
                }
            }
            if !contract_query.is_empty() && !t.contract_id.to_lowercase().contains(&contract_query)
            {
                return false;
            }
            if !commitment_query.is_empty()
                && !t.commitment_ref.to_lowercase().contains(&commitment_query)
            {
                return false;
            }
            if let Some(from) = filter.from {
                if t.date < from {
                    return false;
                }
            }
            if let Some(to) = filter.to {
                if t.date > to {
                    return false;
                }
            }
            query.is_empty()
                || t.description.to_lowercase().contains(&query)
                || t.contract_id.to_lowercase().contains(&query)
                || t.commitment_ref.to_lowercase().contains(&query)
                || t.budget_description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Criteria for the suppliers view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupplierFilter {
    /// Free text over name, trade name and tax id.
    pub search: String,
    /// `None` means all statuses.
    pub status: Option<SupplierStatus>,
}

/// Applies `filter` to `suppliers`.
pub fn filter_suppliers(suppliers: &[Supplier], filter: &SupplierFilter) -> Vec<Supplier> {
    let query = filter.search.trim().to_lowercase();

    suppliers
        .iter()
        .filter(|s| {
            let matches_search = query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.trade_name.to_lowercase().contains(&query)
                || s.tax_id.to_lowercase().contains(&query);
            let matches_status = filter.status.map_or(true, |status| s.status == status);
            matches_search && matches_status
        })
        .cloned()
        .collect()
}
