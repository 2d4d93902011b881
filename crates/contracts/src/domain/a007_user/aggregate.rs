use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::load_mock;
use crate::enums::ActivityStatus;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

// ============================================================================
// Roles
// ============================================================================

/// Роль администратора панели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    #[serde(rename = "Finance Admin")]
    FinanceAdmin,
    #[serde(rename = "Sales Admin")]
    SalesAdmin,
    #[serde(rename = "Logistics Coordinator")]
    LogisticsCoordinator,
    #[serde(rename = "Logistics Courier")]
    LogisticsCourier,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::FinanceAdmin => "Finance Admin",
            UserRole::SalesAdmin => "Sales Admin",
            UserRole::LogisticsCoordinator => "Logistics Coordinator",
            UserRole::LogisticsCourier => "Logistics Courier",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => {
                "Full system access with ability to manage all aspects of the platform"
            }
            UserRole::FinanceAdmin => {
                "Manage financial operations, invoicing and payment processing"
            }
            UserRole::SalesAdmin => "Handle customer orders and sales operations",
            UserRole::LogisticsCoordinator => {
                "Manage delivery planning and logistics operations"
            }
            UserRole::LogisticsCourier => "Handle deliveries and update delivery statuses",
        }
    }

    /// Права, выдаваемые ролью по умолчанию
    pub fn permissions(&self) -> &'static [&'static str] {
        match self {
            UserRole::SuperAdmin => &["all"],
            UserRole::FinanceAdmin => &["finance.view", "finance.edit", "payments.manage"],
            UserRole::SalesAdmin => &["orders.view", "orders.approve", "customers.manage"],
            UserRole::LogisticsCoordinator => &["logistics.plan", "logistics.view"],
            UserRole::LogisticsCourier => &["deliveries.update", "deliveries.view"],
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::SuperAdmin,
            UserRole::FinanceAdmin,
            UserRole::SalesAdmin,
            UserRole::LogisticsCoordinator,
            UserRole::LogisticsCourier,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Пользователь панели администрирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: ActivityStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub last_login: Option<NaiveDateTime>,
}

impl AdminUser {
    /// Новый пользователь получает права своей роли
    pub fn new_for_insert(id: i64, name: String, email: String, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            status: ActivityStatus::Active,
            permissions: role.permissions().iter().map(|p| p.to_string()).collect(),
            last_login: None,
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == "all" || p == permission)
    }
}

impl TableRecord for AdminUser {
    fn record_key(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.code().into(),
            "status" => self.status.code().into(),
            "last_login" => FieldValue::optional(self.last_login),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.role.code())
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.code().to_string())
    }
}

pub fn mock_users() -> anyhow::Result<Vec<AdminUser>> {
    load_mock("a007_user", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view, PageSpec, SortSpec};

    #[test]
    fn test_mock_loads() {
        let users = mock_users().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].role, UserRole::FinanceAdmin);
        assert!(users[0].has_permission("orders.approve"));
        assert!(!users[1].has_permission("orders.approve"));
    }

    #[test]
    fn test_new_user_gets_role_permissions() {
        let user = AdminUser::new_for_insert(
            4,
            "Lisa Wong".to_string(),
            "lisa@example.com".to_string(),
            UserRole::LogisticsCoordinator,
        );
        assert_eq!(user.permissions, vec!["logistics.plan", "logistics.view"]);
        assert_eq!(user.last_login, None);
    }

    #[test]
    fn test_sort_by_last_login() {
        let mut users = mock_users().unwrap();
        users.push(AdminUser::new_for_insert(
            4,
            "Tom Brown".to_string(),
            "tom@example.com".to_string(),
            UserRole::LogisticsCourier,
        ));
        let view = compute_view(&users, &SortSpec::asc("last_login"), &PageSpec::first(10)).unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|u| u.id).collect();
        // Никогда не входивший пользователь идет первым
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }
}
