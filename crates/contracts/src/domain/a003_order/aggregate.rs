use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::load_mock;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

// ============================================================================
// Statuses
// ============================================================================

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    Approved,
    Processing,
    #[serde(rename = "Ready for Delivery")]
    ReadyForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::PendingApproval => "Pending Approval",
            OrderStatus::Approved => "Approved",
            OrderStatus::Processing => "Processing",
            OrderStatus::ReadyForDelivery => "Ready for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::PendingApproval,
            OrderStatus::Approved,
            OrderStatus::Processing,
            OrderStatus::ReadyForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Статус оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    #[serde(rename = "Pending Verification")]
    PendingVerification,
    Paid,
    Overdue,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::PendingVerification => "Pending Verification",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Unpaid,
            PaymentStatus::PendingVerification,
            PaymentStatus::Paid,
            PaymentStatus::Overdue,
            PaymentStatus::Refunded,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Способ оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Manual Transfer")]
    ManualTransfer,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "QR Payment")]
    QrPayment,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::ManualTransfer => "Manual Transfer",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::QrPayment => "QR Payment",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::BankTransfer,
            PaymentMethod::ManualTransfer,
            PaymentMethod::CreditCard,
            PaymentMethod::QrPayment,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: i64,
}

impl OrderItem {
    pub fn amount(&self) -> i64 {
        i64::from(self.quantity) * self.price
    }
}

/// Заказ клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Номер заказа, например "ORD-BCHS-202409293001"
    pub id: String,
    pub customer_name: String,
    pub order_date: NaiveDateTime,
    pub total: i64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub payment_due: NaiveDate,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Сумма по строкам заказа
    pub fn items_total(&self) -> i64 {
        self.items.iter().map(OrderItem::amount).sum()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.payment_status != PaymentStatus::Paid
            && self.payment_status != PaymentStatus::Refunded
            && self.payment_due < today
    }
}

impl TableRecord for Order {
    fn record_key(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.as_str().into(),
            "customer_name" => self.customer_name.as_str().into(),
            "order_date" => self.order_date.into(),
            "total" => self.total.into(),
            "status" => self.status.code().into(),
            "payment_status" => self.payment_status.code().into(),
            "payment_method" => self.payment_method.code().into(),
            "payment_due" => self.payment_due.into(),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.id, self.customer_name)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.code().to_string())
    }
}

pub fn mock_orders() -> anyhow::Result<Vec<Order>> {
    load_mock("a003_order", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view, PageSpec, SortSpec};

    #[test]
    fn test_mock_loads_with_items() {
        let orders = mock_orders().unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].status, OrderStatus::PendingApproval);
        assert_eq!(orders[2].payment_status, PaymentStatus::PendingVerification);
        assert_eq!(orders[1].items_total(), 3_750_000);
    }

    #[test]
    fn test_default_sort_newest_first() {
        let orders = mock_orders().unwrap();
        let view = compute_view(&orders, &SortSpec::desc("order_date"), &PageSpec::first(10)).unwrap();
        let ids: Vec<&str> = view.visible_records.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ORD-SFN-202409293003",
                "ORD-BCHS-202409293001",
                "ORD-LBR-202409293002"
            ]
        );
    }

    #[test]
    fn test_is_overdue() {
        let orders = mock_orders().unwrap();
        let after_due = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(orders[0].is_overdue(after_due));
        assert!(!orders[1].is_overdue(after_due));
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }
}
