//! Supplier entity and partial updates.

use crate::model::Contract;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration status of a supplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    Blocked,
}

serde_plain::derive_display_from_serialize!(SupplierStatus);
serde_plain::derive_fromstr_from_deserialize!(SupplierStatus);

/// A registered supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Supplier {
    pub id: String,
    /// Razão social.
    pub name: String,
    /// Nome fantasia.
    pub trade_name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub status: SupplierStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub since: NaiveDate,
}

impl Supplier {
    /// Whether `contract` belongs to this supplier.
    ///
    /// Contracts carry a free-text supplier name rather than a supplier id,
    /// so the join is case-insensitive name equality or the contract name
    /// containing the trade name. Inherited from the source data model;
    /// changing this to an id join would change observable results.
    pub fn matches_contract(&self, contract: &Contract) -> bool {
        let contract_name = contract.supplier_name.to_lowercase();
        contract_name == self.name.to_lowercase()
            || contract_name.contains(&self.trade_name.to_lowercase())
    }
}

/// A partial update to a supplier; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub trade_name: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<SupplierStatus>,
    pub category: Option<String>,
    pub address: Option<String>,
}

impl SupplierUpdate {
    /// Applies the set fields onto `supplier`.
    pub fn apply(&self, supplier: &mut Supplier) {
        if let Some(name) = &self.name {
            supplier.name = name.clone();
        }
        if let Some(trade_name) = &self.trade_name {
            supplier.trade_name = trade_name.clone();
        }
        if let Some(tax_id) = &self.tax_id {
            supplier.tax_id = tax_id.clone();
        }
        if let Some(email) = &self.email {
            supplier.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            supplier.phone = phone.clone();
        }
        if let Some(status) = self.status {
            supplier.status = status;
        }
        if let Some(category) = &self.category {
            supplier.category = Some(category.clone());
        }
        if let Some(address) = &self.address {
            supplier.address = Some(address.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{contract_named, supplier_fixture, ymd};

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let mut supplier = supplier_fixture();
        let original_email = supplier.email.clone();
        let update = SupplierUpdate {
            phone: Some("(61) 3333-4444".to_string()),
            status: Some(SupplierStatus::Blocked),
            ..SupplierUpdate::default()
        };
        update.apply(&mut supplier);
        assert_eq!(supplier.phone, "(61) 3333-4444");
        assert_eq!(supplier.status, SupplierStatus::Blocked);
        assert_eq!(supplier.email, original_email);
    }

    #[test]
    fn test_matches_contract_by_exact_name() {
        let supplier = supplier_fixture();
        let contract = contract_named(&supplier.name.to_uppercase());
        assert!(supplier.matches_contract(&contract));
    }

    #[test]
    fn test_matches_contract_by_trade_name_substring() {
        let mut supplier = supplier_fixture();
        supplier.name = "Intelliway Tecnologia Ltda".to_string();
        supplier.trade_name = "Intelliway".to_string();
        let contract = contract_named("INTELLIWAY TECNOLOGIA LTDA - FILIAL DF");
        assert!(supplier.matches_contract(&contract));
    }

    #[test]
    fn test_does_not_match_unrelated_contract() {
        let supplier = supplier_fixture();
        let contract = contract_named("Outra Empresa S/A");
        assert!(!supplier.matches_contract(&contract));
    }

    #[test]
    fn test_status_serde() {
        let status: SupplierStatus = "BLOCKED".parse().unwrap();
        assert_eq!(status, SupplierStatus::Blocked);
        assert_eq!(SupplierStatus::Inactive.to_string(), "INACTIVE");
    }

    #[test]
    fn test_optional_fields_absent_from_json() {
        let mut supplier = supplier_fixture();
        supplier.category = None;
        supplier.address = None;
        supplier.since = ymd(2024, 1, 5);
        let value = serde_json::to_value(&supplier).unwrap();
        assert!(value.get("category").is_none());
        assert!(value.get("address").is_none());
    }
}
