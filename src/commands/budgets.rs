//! Budget allocation listing command handler.

use crate::args::BudgetsArgs;
use crate::commands::{counted, Out};
use crate::model::Dotacao;
use crate::Ledger;
use std::fmt::Write;

/// Lists dotações matching the given filters with their remaining balances.
pub fn budgets(ledger: &Ledger, args: &BudgetsArgs) -> Out<Vec<Dotacao>> {
    let matched = ledger.filter_dotacoes(&args.filter());

    let mut message = counted(matched.len(), "dotação matched", "dotações matched");
    for dotacao in &matched {
        let balance = ledger.budget_balance(dotacao);
        let marker = if balance.is_positive() { "" } else { " [sem saldo]" };
        let _ = write!(
            message,
            "\n  {:<36} {:<11} saldo {}{}",
            dotacao.description,
            dotacao.unit.to_string(),
            balance,
            marker,
        );
    }

    Out::new(message, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ledger;

    #[test]
    fn test_listing_all_budgets() {
        let out = budgets(&ledger(), &BudgetsArgs::default());
        assert!(out.message().starts_with("4 dotações matched"));
        assert_eq!(out.structure().unwrap().len(), 4);
    }

    #[test]
    fn test_exhausted_budget_is_marked() {
        let out = budgets(&ledger(), &BudgetsArgs::default());
        let line = out
            .message()
            .lines()
            .find(|l| l.contains("MOL Mediação"))
            .unwrap();
        assert!(line.contains("[sem saldo]"));
    }
}
