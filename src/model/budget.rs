//! Dotação (budget allocation) entity.

use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The budget unit an allocation draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetUnit {
    #[default]
    Fadep,
    Defensoria,
}

serde_plain::derive_display_from_serialize!(BudgetUnit);
serde_plain::derive_fromstr_from_deserialize!(BudgetUnit);

/// A budget allocation tied to a contract.
///
/// Transactions reference allocations by `description`, not by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Dotacao {
    pub id: String,
    /// E.g. "01/2025 - MOL Mediação Online".
    pub description: String,
    /// Reference into the SEI document system.
    pub sei_ref: String,
    pub tax_id: String,
    pub date: NaiveDate,
    pub total_amount: Amount,
    pub used_amount: Amount,
    pub unit: BudgetUnit,
    /// Foreign key into `Contract.id`.
    pub contract_id: String,
}

impl Dotacao {
    /// Remaining balance, with no clamping.
    ///
    /// `used_amount <= total_amount` is expected but not enforced here, so
    /// the result can be negative; callers flag that, the calculator never
    /// masks it.
    pub fn balance(&self) -> Amount {
        self.total_amount - self.used_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{amt, dotacao_fixture};

    #[test]
    fn test_balance_is_total_minus_used() {
        let mut dotacao = dotacao_fixture();
        dotacao.total_amount = amt("294078.40");
        dotacao.used_amount = amt("50000.00");
        assert_eq!(dotacao.balance(), amt("244078.40"));
    }

    #[test]
    fn test_fully_used_balance_is_exactly_zero() {
        let mut dotacao = dotacao_fixture();
        dotacao.total_amount = amt("92925.00");
        dotacao.used_amount = amt("92925.00");
        assert_eq!(dotacao.balance(), Amount::ZERO);
        assert!(dotacao.balance().is_zero());
    }

    #[test]
    fn test_overspent_balance_goes_negative() {
        let mut dotacao = dotacao_fixture();
        dotacao.total_amount = amt("1000.00");
        dotacao.used_amount = amt("1500.00");
        assert_eq!(dotacao.balance(), amt("-500.00"));
        assert!(dotacao.balance().is_negative());
    }

    #[test]
    fn test_balance_is_idempotent() {
        let dotacao = dotacao_fixture();
        assert_eq!(dotacao.balance(), dotacao.balance());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(BudgetUnit::Fadep.to_string(), "FADEP");
        assert_eq!(BudgetUnit::Defensoria.to_string(), "DEFENSORIA");
    }
}
