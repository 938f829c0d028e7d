//! Dashboard command handler.

use crate::commands::Out;
use crate::query::DashboardMetrics;
use crate::Ledger;
use std::fmt::Write;

/// Computes and renders the dashboard for the current fiscal year.
pub fn dashboard(ledger: &Ledger) -> Out<DashboardMetrics> {
    let metrics = ledger.dashboard_metrics();

    let mut message = format!(
        "Exercício {}: {} contracts stored VIGENTE ({} by effective status), {} overdue\n",
        ledger.fiscal_year(),
        metrics.active_contracts,
        metrics.active_contracts_effective,
        metrics.overdue_contracts,
    );
    let _ = writeln!(
        message,
        "Paid {} | Committed {} | To pay {}",
        metrics.financial.total_paid, metrics.financial.total_committed, metrics.financial.to_pay,
    );
    let _ = write!(
        message,
        "Budget {} total, {} used ({:.1}%), {} available",
        metrics.budget.total_budget,
        metrics.budget.total_used,
        metrics.budget.percentage_used,
        metrics.budget.available,
    );
    for payment in &metrics.recent_payments {
        let _ = write!(
            message,
            "\n  {} {} {} ({})",
            payment.date, payment.amount, payment.description, payment.contract_id
        );
    }

    Out::new(message, metrics)
}
