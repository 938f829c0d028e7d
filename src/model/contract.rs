//! Contract entity and the status/date calculators that hang off of it.

use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status stored on a contract record.
///
/// The stored status is never shown directly; every view derives the
/// effective status through [`Contract::effective_status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractStatus {
    /// In force.
    #[default]
    Vigente,
    /// Terminated. Terminal: always wins over date-derived states.
    Rescindido,
    /// Approaching (or past) its end date and needing attention.
    Finalizando,
}

serde_plain::derive_display_from_serialize!(ContractStatus);
serde_plain::derive_fromstr_from_deserialize!(ContractStatus);

/// A procurement contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Contract {
    pub id: String,
    /// Administrative number, e.g. "074/2025". Transactions reference
    /// contracts by this number, not by `id`.
    pub number: String,
    pub supplier_name: String,
    pub status: ContractStatus,
    pub end_date: NaiveDate,
    pub total_value: Amount,
    pub budget_balance: Amount,
    pub commitment_balance: Amount,
}

/// Number of whole days from `today` until `end`. Negative means past due.
///
/// Both operands are day-granularity dates, so no midnight normalization is
/// needed. `today` is injected rather than read from the wall clock.
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days()
}

impl Contract {
    /// Derives the status every view should display.
    ///
    /// RESCINDIDO is terminal. Otherwise a contract within 90 days of its
    /// end date, or already past it, is FINALIZANDO. Total over all `i64`
    /// inputs.
    pub fn effective_status(&self, days_remaining: i64) -> ContractStatus {
        if self.status == ContractStatus::Rescindido {
            return ContractStatus::Rescindido;
        }
        if (0..=90).contains(&days_remaining) {
            return ContractStatus::Finalizando;
        }
        if days_remaining < 0 {
            // Past due but not rescinded: kept in the alert state rather
            // than a distinct EXPIRED status.
            return ContractStatus::Finalizando;
        }
        ContractStatus::Vigente
    }

    /// True when the end date has passed.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        days_remaining(self.end_date, today) < 0
    }
}
