//! Contracts listing command handler.

use crate::args::ContractsArgs;
use crate::commands::{counted, Out};
use crate::model::Contract;
use crate::Ledger;
use std::fmt::Write;

/// Lists contracts matching the given filters, annotated with their
/// effective status and days remaining.
pub fn contracts(ledger: &Ledger, args: &ContractsArgs) -> Out<Vec<Contract>> {
    let matched = ledger.filter_contracts(&args.filter());

    let mut message = counted(matched.len(), "contract matched", "contracts matched");
    for contract in &matched {
        let days = ledger.days_remaining(contract);
        let _ = write!(
            message,
            "\n  {:<10} {:<12} {:>5}d  {:>16}  {}",
            contract.number,
            ledger.effective_status(contract).to_string(),
            days,
            contract.total_value.to_string(),
            contract.supplier_name,
        );
    }

    Out::new(message, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ledger;

    #[test]
    fn test_default_listing_shows_active_contracts() {
        let out = contracts(&ledger(), &ContractsArgs::default());
        assert!(out.message().starts_with("9 contracts matched"));
        assert_eq!(out.structure().unwrap().len(), 9);
    }

    #[test]
    fn test_listing_annotates_effective_status() {
        let out = contracts(&ledger(), &ContractsArgs::default());
        // 121/2022 ends in 15 days, so the listing shows FINALIZANDO even
        // though the stored status is VIGENTE.
        let line = out
            .message()
            .lines()
            .find(|l| l.contains("121/2022"))
            .unwrap();
        assert!(line.contains("FINALIZANDO"));
    }
}
