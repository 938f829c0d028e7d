//! Suppliers listing command handler.

use crate::args::SuppliersArgs;
use crate::commands::{counted, Out};
use crate::model::Supplier;
use crate::Ledger;
use std::fmt::Write;

/// Lists suppliers matching the given filters, with their linked contracts.
pub fn suppliers(ledger: &Ledger, args: &SuppliersArgs) -> Out<Vec<Supplier>> {
    let matched = ledger.filter_suppliers(&args.filter());

    let mut message = counted(matched.len(), "supplier matched", "suppliers matched");
    for supplier in &matched {
        let contracts = ledger.linked_contracts(supplier);
        let _ = write!(
            message,
            "\n  {:<44} {:<8} {}  {}",
            supplier.name,
            supplier.status.to_string(),
            supplier.tax_id,
            counted(contracts.len(), "contract", "contracts"),
        );
    }

    Out::new(message, matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::ledger;

    #[test]
    fn test_listing_all_suppliers() {
        let out = suppliers(&ledger(), &SuppliersArgs::default());
        assert!(out.message().starts_with("7 suppliers matched"));
    }

    #[test]
    fn test_linked_contract_counts_in_message() {
        let out = suppliers(&ledger(), &SuppliersArgs::default());
        let line = out
            .message()
            .lines()
            .find(|l| l.contains("Gartner"))
            .unwrap();
        assert!(line.contains("1 contract"));
    }
}
