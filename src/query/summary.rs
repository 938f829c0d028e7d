//! Aggregation engine.
//!
//! Everything here is recomputed from scratch on each call; nothing is
//! cached, so a read can never observe state older than the collections it
//! was handed. All transaction-scoped values honor the fiscal year.

use crate::model::{
    days_remaining, Amount, Contract, ContractStatus, Dotacao, Transaction, TransactionType,
};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liquidation/commitment totals for a single contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FinancialSummary {
    pub total_paid: Amount,
    pub total_committed: Amount,
}

/// Fiscal-year-wide liquidation/commitment totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FinancialMetrics {
    pub total_paid: Amount,
    pub total_committed: Amount,
    /// Committed minus paid, floored at zero.
    pub to_pay: Amount,
}

/// Totals over all budget allocations. Not fiscal-year scoped: allocations
/// carry no year filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BudgetMetrics {
    pub total_budget: Amount,
    pub total_used: Amount,
    pub available: Amount,
    pub percentage_used: f64,
}

/// The headline numbers for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardMetrics {
    /// Count of contracts whose *stored* status is VIGENTE. The headline KPI
    /// deliberately ignores the derived status; see
    /// `active_contracts_effective` for the other reading.
    pub active_contracts: usize,
    /// Count of contracts whose *effective* status is VIGENTE.
    pub active_contracts_effective: usize,
    /// Contracts past their end date and not rescinded.
    pub overdue_contracts: usize,
    pub financial: FinancialMetrics,
    pub budget: BudgetMetrics,
    /// The five most recent liquidations, newest first.
    pub recent_payments: Vec<Transaction>,
}

/// Transactions visible under the given fiscal year.
pub fn in_fiscal_year(transactions: &[Transaction], year: i32) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(move |t| t.fiscal_year() == year)
}

/// Sums the fiscal-year transactions of one contract, grouped by type.
///
/// The contract is matched by *number* with case-insensitive equality.
/// REINFORCEMENT and CANCELLATION are not netted into either total; only
/// liquidations and commitments count.
pub fn contract_financial_summary(
    transactions: &[Transaction],
    contract_number: &str,
    year: i32,
) -> FinancialSummary {
    let target = contract_number.trim().to_lowercase();
    let mut summary = FinancialSummary::default();
    for t in in_fiscal_year(transactions, year).filter(|t| t.contract_id.to_lowercase() == target) {
        match t.kind {
            TransactionType::Liquidation => summary.total_paid = summary.total_paid + t.amount,
            TransactionType::Commitment => {
                summary.total_committed = summary.total_committed + t.amount
            }
            TransactionType::Reinforcement | TransactionType::Cancellation => {}
        }
    }
    summary
}

/// Fiscal-year transactions of one contract, matched by number,
/// case-insensitive, in store order.
pub fn transactions_by_contract(
    transactions: &[Transaction],
    contract_number: &str,
    year: i32,
) -> Vec<Transaction> {
    let target = contract_number.trim().to_lowercase();
    in_fiscal_year(transactions, year)
        .filter(|t| t.contract_id.to_lowercase() == target)
        .cloned()
        .collect()
}

/// Fiscal-year transactions linked to a dotação by exact description match,
/// in chronological order.
pub fn budget_history(transactions: &[Transaction], dotacao: &Dotacao, year: i32) -> Vec<Transaction> {
    let mut history: Vec<Transaction> = in_fiscal_year(transactions, year)
        .filter(|t| t.budget_description == dotacao.description)
        .cloned()
        .collect();
    history.sort_by_key(|t| t.date);
    history
}

/// Paid/committed/to-pay over all fiscal-year transactions.
pub fn financial_metrics(transactions: &[Transaction], year: i32) -> FinancialMetrics {
    let total_paid: Amount = in_fiscal_year(transactions, year)
        .filter(|t| t.kind == TransactionType::Liquidation)
        .map(|t| t.amount)
        .sum();
    let total_committed: Amount = in_fiscal_year(transactions, year)
        .filter(|t| t.kind == TransactionType::Commitment)
        .map(|t| t.amount)
        .sum();
    let to_pay = (total_committed - total_paid).max(Amount::ZERO);
    FinancialMetrics {
        total_paid,
        total_committed,
        to_pay,
    }
}

/// Totals and utilization over all allocations.
pub fn budget_metrics(dotacoes: &[Dotacao]) -> BudgetMetrics {
    let total_budget: Amount = dotacoes.iter().map(|d| d.total_amount).sum();
    let total_used: Amount = dotacoes.iter().map(|d| d.used_amount).sum();
    let percentage_used = if total_budget.is_zero() {
        0.0
    } else {
        (total_used.value() / total_budget.value() * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or_default()
    };
    BudgetMetrics {
        total_budget,
        total_used,
        available: total_budget - total_used,
        percentage_used,
    }
}

/// The five most recent fiscal-year liquidations, newest first.
pub fn recent_payments(transactions: &[Transaction], year: i32) -> Vec<Transaction> {
    let mut payments: Vec<Transaction> = in_fiscal_year(transactions, year)
        .filter(|t| t.kind == TransactionType::Liquidation)
        .cloned()
        .collect();
    payments.sort_by(|a, b| b.date.cmp(&a.date));
    payments.truncate(5);
    payments
}

/// Computes every dashboard metric from current state.
pub fn dashboard_metrics(
    contracts: &[Contract],
    dotacoes: &[Dotacao],
    transactions: &[Transaction],
    year: i32,
    today: NaiveDate,
) -> DashboardMetrics {
    let active_contracts = contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Vigente)
        .count();
    let active_contracts_effective = contracts
        .iter()
        .filter(|c| {
            let days = days_remaining(c.end_date, today);
            c.effective_status(days) == ContractStatus::Vigente
        })
        .count();
    let overdue_contracts = contracts
        .iter()
        .filter(|c| c.status != ContractStatus::Rescindido && c.is_past_due(today))
        .count();

    DashboardMetrics {
        active_contracts,
        active_contracts_effective,
        overdue_contracts,
        financial: financial_metrics(transactions, year),
        budget: budget_metrics(dotacoes),
        recent_payments: recent_payments(transactions, year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{amt, fixture_dataset, today, transaction_fixture, ymd};

    #[test]
    fn test_contract_summary_for_074_2025() {
        // COMMITMENT 92925.00 + LIQUIDATION 40000.00 + LIQUIDATION 52925.00
        // in fiscal 2025: both totals land on 92925.00 exactly.
        let transactions = vec![
            transaction_fixture("074/2025", TransactionType::Commitment, "92925.00"),
            transaction_fixture("074/2025", TransactionType::Liquidation, "40000.00"),
            transaction_fixture("074/2025", TransactionType::Liquidation, "52925.00"),
        ];
        let summary = contract_financial_summary(&transactions, "074/2025", 2025);
        assert_eq!(summary.total_paid, amt("92925.00"));
        assert_eq!(summary.total_committed, amt("92925.00"));
    }

    #[test]
    fn test_contract_summary_matching_is_case_insensitive_and_trimmed() {
        let transactions = vec![transaction_fixture(
            "074/2025",
            TransactionType::Liquidation,
            "10.00",
        )];
        let summary = contract_financial_summary(&transactions, "  074/2025 ", 2025);
        assert_eq!(summary.total_paid, amt("10.00"));
    }

    #[test]
    fn test_contract_summary_excludes_reinforcement_and_cancellation() {
        let transactions = vec![
            transaction_fixture("087/2025", TransactionType::Commitment, "50000.00"),
            transaction_fixture("087/2025", TransactionType::Reinforcement, "244078.40"),
            transaction_fixture("087/2025", TransactionType::Cancellation, "43503.41"),
        ];
        let summary = contract_financial_summary(&transactions, "087/2025", 2025);
        assert_eq!(summary.total_committed, amt("50000.00"));
        assert_eq!(summary.total_paid, Amount::ZERO);
    }

    #[test]
    fn test_contract_summary_respects_fiscal_year() {
        let mut in_2026 = transaction_fixture("074/2025", TransactionType::Liquidation, "99.00");
        in_2026.date = ymd(2026, 1, 10);
        let transactions = vec![
            transaction_fixture("074/2025", TransactionType::Liquidation, "1.00"),
            in_2026,
        ];
        let summary = contract_financial_summary(&transactions, "074/2025", 2025);
        assert_eq!(summary.total_paid, amt("1.00"));
    }

    #[test]
    fn test_empty_fiscal_year_yields_zero_aggregates() {
        let dataset = fixture_dataset();
        let summary = contract_financial_summary(&dataset.transactions, "074/2025", 2024);
        assert_eq!(summary, FinancialSummary::default());
        let metrics = financial_metrics(&dataset.transactions, 2024);
        assert_eq!(metrics.total_paid, Amount::ZERO);
        assert_eq!(metrics.to_pay, Amount::ZERO);
        assert!(recent_payments(&dataset.transactions, 2024).is_empty());
    }

    #[test]
    fn test_budget_history_is_year_scoped_and_chronological() {
        let dataset = fixture_dataset();
        let mol = dataset
            .dotacoes
            .iter()
            .find(|d| d.id == "1")
            .unwrap()
            .clone();
        let history = budget_history(&dataset.transactions, &mol, 2025);
        // Four MOL transactions in 2025, in date order.
        assert_eq!(history.len(), 4);
        let dates: Vec<_> = history.iter().map(|t| t.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert!(history
            .iter()
            .all(|t| t.budget_description == mol.description));
    }

    #[test]
    fn test_financial_metrics_to_pay_floors_at_zero() {
        let transactions = vec![
            transaction_fixture("074/2025", TransactionType::Liquidation, "500.00"),
            transaction_fixture("074/2025", TransactionType::Commitment, "100.00"),
        ];
        let metrics = financial_metrics(&transactions, 2025);
        assert_eq!(metrics.to_pay, Amount::ZERO);
        assert_eq!(metrics.total_paid, amt("500.00"));
    }

    #[test]
    fn test_budget_metrics_totals_and_percentage() {
        let dataset = fixture_dataset();
        let metrics = budget_metrics(&dataset.dotacoes);
        assert_eq!(metrics.total_budget, amt("1554818.40"));
        assert_eq!(metrics.total_used, amt("262925.00"));
        assert_eq!(metrics.available, amt("1291893.40"));
        assert!((metrics.percentage_used - 16.91).abs() < 0.01);
    }

    #[test]
    fn test_budget_metrics_empty_collection() {
        let metrics = budget_metrics(&[]);
        assert_eq!(metrics.percentage_used, 0.0);
        assert_eq!(metrics.total_budget, Amount::ZERO);
    }

    #[test]
    fn test_recent_payments_sorted_descending_and_capped() {
        let mut transactions = Vec::new();
        for day in 1..=8 {
            let mut t = transaction_fixture("074/2025", TransactionType::Liquidation, "1.00");
            t.id = format!("t{day}");
            t.date = ymd(2025, 3, day);
            transactions.push(t);
        }
        let recent = recent_payments(&transactions, 2025);
        assert_eq!(recent.len(), 5);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t8", "t7", "t6", "t5", "t4"]);
    }

    #[test]
    fn test_dashboard_active_counts_stored_vs_effective() {
        let dataset = fixture_dataset();
        let metrics = dashboard_metrics(
            &dataset.contracts,
            &dataset.dotacoes,
            &dataset.transactions,
            2025,
            today(),
        );
        // Nine contracts are stored VIGENTE; only 121/2022, fifteen days
        // from its end date, derives to FINALIZANDO.
        assert_eq!(metrics.active_contracts, 9);
        assert_eq!(metrics.active_contracts_effective, 8);
        assert_eq!(metrics.overdue_contracts, 0);
    }

    #[test]
    fn test_dashboard_financials_for_sample_2025() {
        let dataset = fixture_dataset();
        let metrics = dashboard_metrics(
            &dataset.contracts,
            &dataset.dotacoes,
            &dataset.transactions,
            2025,
            today(),
        );
        // 2025 liquidations: 196.14 + 23231.25 + 40000.00.
        assert_eq!(metrics.financial.total_paid, amt("63427.39"));
        // 2025 commitments: 92925.00 + 92925.00.
        assert_eq!(metrics.financial.total_committed, amt("185850.00"));
        assert_eq!(metrics.financial.to_pay, amt("122422.61"));
        assert_eq!(metrics.recent_payments.len(), 3);
        assert_eq!(metrics.recent_payments[0].date, ymd(2025, 12, 12));
    }
}
