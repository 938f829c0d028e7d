//! Financial transaction entity.

use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of financial movement a transaction records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Liquidação: an actual payment to the supplier.
    #[default]
    Liquidation,
    /// Empenho: reserves budget funds against a contract.
    Commitment,
    /// Reforço: increases the available budget.
    Reinforcement,
    /// Cancelamento: releases previously committed funds.
    Cancellation,
}

serde_plain::derive_display_from_serialize!(TransactionType);
serde_plain::derive_fromstr_from_deserialize!(TransactionType);

impl TransactionType {
    /// Portuguese label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Liquidation => "Liquidado",
            TransactionType::Commitment => "Empenhado",
            TransactionType::Reinforcement => "Reforço",
            TransactionType::Cancellation => "Cancelado",
        }
    }
}

/// A single financial movement against a contract and a budget allocation.
///
/// Both references are by business key: `contract_id` holds the contract
/// *number* (e.g. "074/2025") and `budget_description` holds the full
/// description of the dotação. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub contract_id: String,
    /// Commitment note reference, e.g. "2025NE000195".
    pub commitment_ref: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Amount,
    pub department: String,
    pub budget_description: String,
}

impl Transaction {
    /// The fiscal year this transaction belongs to.
    pub fn fiscal_year(&self) -> i32 {
        use chrono::Datelike;
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{transaction_fixture, ymd};

    #[test]
    fn test_fiscal_year_from_date() {
        let mut t = transaction_fixture("074/2025", TransactionType::Liquidation, "100.00");
        t.date = ymd(2026, 1, 10);
        assert_eq!(t.fiscal_year(), 2026);
    }

    #[test]
    fn test_type_serde_uses_uppercase_wire_values() {
        let json = serde_json::to_string(&TransactionType::Reinforcement).unwrap();
        assert_eq!(json, "\"REINFORCEMENT\"");
        let kind: TransactionType = serde_json::from_str("\"CANCELLATION\"").unwrap();
        assert_eq!(kind, TransactionType::Cancellation);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TransactionType::Liquidation.label(), "Liquidado");
        assert_eq!(TransactionType::Commitment.label(), "Empenhado");
    }

    #[test]
    fn test_kind_field_serializes_as_type() {
        let t = transaction_fixture("074/2025", TransactionType::Commitment, "92925.00");
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["type"], "COMMITMENT");
    }
}
