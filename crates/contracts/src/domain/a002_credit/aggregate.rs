use serde::{Deserialize, Serialize};

use crate::domain::common::load_mock;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

/// Кредитный лимит по умолчанию для новых клиентов, Rp
pub const DEFAULT_CREDIT_LIMIT: i64 = 50_000_000;
/// Отсрочка платежа по умолчанию, дней
pub const DEFAULT_PAYMENT_TERMS: u32 = 30;

/// Порог загрузки лимита, с которого показывается предупреждение, %
pub const WARNING_UTILIZATION: f64 = 75.0;
/// Порог критической загрузки лимита, %
pub const CRITICAL_UTILIZATION: f64 = 90.0;

// ============================================================================
// Utilization
// ============================================================================

/// Уровень использования кредитного лимита
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationLevel {
    Normal,
    Warning,
    Critical,
}

impl UtilizationLevel {
    pub fn code(&self) -> &'static str {
        match self {
            UtilizationLevel::Normal => "normal",
            UtilizationLevel::Warning => "warning",
            UtilizationLevel::Critical => "critical",
        }
    }

    pub fn all() -> Vec<UtilizationLevel> {
        vec![
            UtilizationLevel::Normal,
            UtilizationLevel::Warning,
            UtilizationLevel::Critical,
        ]
    }

    pub fn from_percent(percent: f64) -> Self {
        if percent >= CRITICAL_UTILIZATION {
            UtilizationLevel::Critical
        } else if percent >= WARNING_UTILIZATION {
            UtilizationLevel::Warning
        } else {
            UtilizationLevel::Normal
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Кредитный счёт клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccount {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub credit_limit: i64,
    pub payment_terms: u32,
    /// Использованная часть лимита, Rp
    pub credit_utilization: i64,
    pub overdue_invoices: u32,
}

impl CreditAccount {
    /// Процент использования лимита; при нулевом лимите 0
    pub fn utilization_percent(&self) -> f64 {
        if self.credit_limit <= 0 {
            return 0.0;
        }
        self.credit_utilization as f64 / self.credit_limit as f64 * 100.0
    }

    pub fn utilization_level(&self) -> UtilizationLevel {
        UtilizationLevel::from_percent(self.utilization_percent())
    }

    pub fn available_credit(&self) -> i64 {
        (self.credit_limit - self.credit_utilization).max(0)
    }
}

impl TableRecord for CreditAccount {
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
            "credit_utilization" => self.credit_utilization.into(),
            "utilization_percent" => self.utilization_percent().into(),
            "overdue_invoices" => self.overdue_invoices.into(),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.email)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.utilization_level().code().to_string())
    }
}

/// Глобальные настройки кредитования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSettings {
    pub default_credit_limit: i64,
    pub default_payment_terms: u32,
}

impl Default for CreditSettings {
    fn default() -> Self {
        Self {
            default_credit_limit: DEFAULT_CREDIT_LIMIT,
            default_payment_terms: DEFAULT_PAYMENT_TERMS,
        }
    }
}

pub fn mock_credit_accounts() -> anyhow::Result<Vec<CreditAccount>> {
    load_mock("a002_credit", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view_filtered, PageSpec, RecordFilter, SortSpec};

    fn account(limit: i64, used: i64) -> CreditAccount {
        CreditAccount {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            avatar: "T".to_string(),
            credit_limit: limit,
            payment_terms: 30,
            credit_utilization: used,
            overdue_invoices: 0,
        }
    }

    #[test]
    fn test_utilization_levels() {
        assert_eq!(account(100, 90).utilization_level(), UtilizationLevel::Critical);
        assert_eq!(account(100, 75).utilization_level(), UtilizationLevel::Warning);
        assert_eq!(account(100, 74).utilization_level(), UtilizationLevel::Normal);
    }

    #[test]
    fn test_zero_limit_counts_as_unused() {
        let acc = account(0, 5_000);
        assert_eq!(acc.utilization_percent(), 0.0);
        assert_eq!(acc.available_credit(), 0);
    }

    #[test]
    fn test_mock_levels() {
        let accounts = mock_credit_accounts().unwrap();
        let levels: Vec<UtilizationLevel> =
            accounts.iter().map(|a| a.utilization_level()).collect();
        // 75%, 90%, 80%
        assert_eq!(
            levels,
            vec![
                UtilizationLevel::Warning,
                UtilizationLevel::Critical,
                UtilizationLevel::Warning
            ]
        );
    }

    #[test]
    fn test_filter_by_level_and_sort_by_overdue() {
        let accounts = mock_credit_accounts().unwrap();
        let view = compute_view_filtered(
            &accounts,
            &RecordFilter::new("", Some("warning".to_string())),
            &SortSpec::desc("overdue_invoices"),
            &PageSpec::first(10),
        )
        .unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
