use serde::{Deserialize, Serialize};

use crate::domain::common::{initials, load_mock};
use crate::enums::ActivityStatus;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

// ============================================================================
// Aggregate
// ============================================================================

/// Клиент (покупатель) с кредитным лимитом и условиями оплаты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar: String,
    /// Кредитный лимит, Rp
    pub credit_limit: i64,
    /// Отсрочка платежа, дней
    pub payment_terms: u32,
    pub status: ActivityStatus,
    #[serde(default)]
    pub promo_notes: String,
}

impl Customer {
    /// Создать нового клиента; аватар строится из инициалов
    pub fn new_for_insert(
        id: i64,
        name: String,
        email: String,
        credit_limit: i64,
        payment_terms: u32,
        status: ActivityStatus,
        promo_notes: String,
    ) -> Self {
        Self {
            id,
            avatar: initials(&name),
            name,
            email,
            credit_limit,
            payment_terms,
            status,
            promo_notes,
        }
    }
}

impl TableRecord for Customer {
    fn record_key(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "credit_limit" => self.credit_limit.into(),
            "payment_terms" => self.payment_terms.into(),
            "status" => self.status.code().into(),
            "promo_notes" => self.promo_notes.as_str().into(),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.email)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.code().to_string())
    }
}

/// Демонстрационный список клиентов
pub fn mock_customers() -> anyhow::Result<Vec<Customer>> {
    load_mock("a001_customer", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view, PageSpec, SortSpec};

    #[test]
    fn test_mock_loads() {
        let customers = mock_customers().unwrap();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].name, "Budi Santoso");
        assert_eq!(customers[2].status, ActivityStatus::Inactive);
    }

    #[test]
    fn test_sort_by_credit_limit_desc() {
        let customers = mock_customers().unwrap();
        let view = compute_view(
            &customers,
            &SortSpec::desc("credit_limit"),
            &PageSpec::first(10),
        )
        .unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_new_for_insert_builds_avatar() {
        let customer = Customer::new_for_insert(
            4,
            "Made Wirawan".to_string(),
            "made@example.com".to_string(),
            10_000_000,
            30,
            ActivityStatus::Active,
            String::new(),
        );
        assert_eq!(customer.avatar, "MW");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let customers = mock_customers().unwrap();
        let json = serde_json::to_value(&customers[0]).unwrap();
        assert_eq!(json["creditLimit"], 100_000_000);
        assert_eq!(json["paymentTerms"], 30);
    }
}
