//! Transactions listing command handler.

use crate::args::TransactionsArgs;
use crate::commands::{counted, Out};
use crate::model::Transaction;
use crate::Ledger;
use std::fmt::Write;

/// Lists fiscal-year transactions matching the given filters.
pub fn transactions(ledger: &Ledger, args: &TransactionsArgs) -> Out<Vec<Transaction>> {
    let matched = ledger.filter_transactions(&args.filter());

    let mut message = format!(
        "{} in exercício {}",
        counted(matched.len(), "transaction matched", "transactions matched"),
        ledger.fiscal_year(),
    );
    for t in &matched {
        let _ = write!(
            message,
            "\n  {} {:<10} {:>16}  {:<10} {}",
            t.date,
            t.kind.label(),
            t.amount.to_string(),
            t.contract_id,
            t.description,
        );
    }

    Out::new(message, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ledger;

    #[test]
    fn test_listing_is_fiscal_year_scoped() {
        let out = transactions(&ledger(), &TransactionsArgs::default());
        assert!(out.message().starts_with("7 transactions matched"));
        assert!(out.message().contains("exercício 2025"));
    }

    #[test]
    fn test_empty_year_message() {
        let mut ledger = ledger();
        ledger.set_fiscal_year(2024);
        let out = transactions(&ledger, &TransactionsArgs::default());
        assert!(out.message().starts_with("0 transactions matched"));
        assert!(out.structure().unwrap().is_empty());
    }
}
