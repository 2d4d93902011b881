use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use chrono::{Duration, NaiveDateTime};
use contracts::domain::a003_order::{
    mock_orders, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus,
};
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a003_order";

/// Срок оплаты нового заказа, дней от даты заказа
pub const DEFAULT_PAYMENT_DAYS: i64 = 14;

/// Диалоги страницы заказов, ключ записи: номер заказа
#[derive(Clone, Debug, PartialEq)]
pub enum OrderDialog {
    Add,
    Edit(String),
    Delete(String),
}

pub type OrderListState = ListState<Order, OrderDialog>;

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(ListState::load(mock_orders(), TABLE_KEY, &table_defaults(TABLE_KEY)))
}

pub fn status_options() -> Vec<(String, String)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect()
}

pub fn payment_status_options() -> Vec<(String, String)> {
    PaymentStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect()
}

pub fn payment_method_options() -> Vec<(String, String)> {
    PaymentMethod::all()
        .into_iter()
        .map(|m| (m.code().to_string(), m.code().to_string()))
        .collect()
}

/// Клиенты, уже встречающиеся в заказах, в порядке первого появления
pub fn known_customers(orders: &[Order]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for order in orders {
        if !names.contains(&order.customer_name) {
            names.push(order.customer_name.clone());
        }
    }
    names
}

/// Номер нового заказа вида `ORD-BCC-20240310001`: инициалы клиента,
/// дата и порядковый номер за день
pub fn next_order_id(customer_name: &str, order_date: NaiveDateTime, existing: &[Order]) -> String {
    let prefix = format!(
        "ORD-{}-{}",
        initials_all(customer_name),
        order_date.format("%Y%m%d")
    );
    let mut seq = existing.len() + 1;
    loop {
        let candidate = format!("{}{:03}", prefix, seq);
        if existing.iter().all(|o| o.id != candidate) {
            return candidate;
        }
        seq += 1;
    }
}

fn initials_all(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "NEW".to_string()
    } else {
        letters
    }
}

/// Строка заказа в форме
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderItemForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl OrderItemForm {
    pub fn from_item(item: &OrderItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.to_string(),
        }
    }

    pub fn to_item(&self, line: usize) -> FieldResult<OrderItem> {
        let name = form_utils::required(&format!("Item {} product", line), &self.name)?;
        let quantity = form_utils::count(&format!("Item {} quantity", line), &self.quantity)?;
        if quantity == 0 {
            return Err(format!("Item {} quantity must be at least 1", line));
        }
        let price = form_utils::amount(&format!("Item {} price", line), &self.price)?;
        Ok(OrderItem {
            name,
            quantity,
            price,
        })
    }
}

/// Значения формы добавления/редактирования заказа
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub status: String,
    pub payment_status: String,
    pub payment_method: String,
    pub payment_due: String,
    pub items: Vec<OrderItemForm>,
}

impl OrderForm {
    pub fn for_new(today: NaiveDateTime) -> Self {
        Self {
            status: OrderStatus::PendingApproval.code().to_string(),
            payment_status: PaymentStatus::Unpaid.code().to_string(),
            payment_method: PaymentMethod::BankTransfer.code().to_string(),
            payment_due: form_utils::date_input_value(Some(
                (today + Duration::days(DEFAULT_PAYMENT_DAYS)).date(),
            )),
            items: vec![OrderItemForm::default()],
            ..Self::default()
        }
    }

    pub fn from_order(order: &Order) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            status: order.status.code().to_string(),
            payment_status: order.payment_status.code().to_string(),
            payment_method: order.payment_method.code().to_string(),
            payment_due: form_utils::date_input_value(Some(order.payment_due)),
            items: order.items.iter().map(OrderItemForm::from_item).collect(),
        }
    }

    /// Собирает заказ. Для нового заказа (`editing = None`) номер и дата
    /// назначаются здесь; итог всегда пересчитывается по строкам.
    pub fn to_order(
        &self,
        editing: Option<&Order>,
        now: NaiveDateTime,
        existing: &[Order],
    ) -> FieldResult<Order> {
        let customer_name = form_utils::required("Customer", &self.customer_name)?;
        let status = OrderStatus::from_code(&self.status)
            .ok_or_else(|| format!("Unknown order status: {}", self.status))?;
        let payment_status = PaymentStatus::from_code(&self.payment_status)
            .ok_or_else(|| format!("Unknown payment status: {}", self.payment_status))?;
        let payment_method = PaymentMethod::from_code(&self.payment_method)
            .ok_or_else(|| format!("Unknown payment method: {}", self.payment_method))?;
        let payment_due = form_utils::date("Payment Due Date", &self.payment_due)?;

        if self.items.is_empty() {
            return Err("Order must contain at least one item".to_string());
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_item(i + 1))
            .collect::<FieldResult<Vec<OrderItem>>>()?;

        let (id, order_date) = match editing {
            Some(order) => (order.id.clone(), order.order_date),
            None => (next_order_id(&customer_name, now, existing), now),
        };

        let mut order = Order {
            id,
            customer_name,
            order_date,
            total: 0,
            status,
            payment_status,
            payment_method,
            payment_due,
            items,
        };
        order.total = order.items_total();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state() -> OrderListState {
        ListState::load(mock_orders(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    fn ids(s: &OrderListState) -> Vec<String> {
        s.view.visible_records.iter().map(|o| o.id.clone()).collect()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 12)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn item(name: &str, quantity: &str, price: &str) -> OrderItemForm {
        OrderItemForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_initial_view_newest_first() {
        let s = state();
        assert_eq!(
            ids(&s),
            vec![
                "ORD-SFN-202409293003",
                "ORD-BCHS-202409293001",
                "ORD-LBR-202409293002"
            ]
        );
    }

    #[test]
    fn test_status_filter() {
        let mut s = state();
        s.set_status_filter(Some("Approved".to_string()));
        assert_eq!(ids(&s), vec!["ORD-LBR-202409293002"]);
    }

    #[test]
    fn test_search_by_customer() {
        let mut s = state();
        s.set_search_query("brisa".to_string());
        assert_eq!(ids(&s), vec!["ORD-LBR-202409293002"]);
    }

    #[test]
    fn test_new_order_total_from_items() {
        let s = state();
        let mut form = OrderForm::for_new(now());
        form.customer_name = "Beach Club Canggu".to_string();
        form.items = vec![item("Pale Ale", "4", "250.000"), item("Cerveza", "1", "Rp 1.500.000")];
        let order = form.to_order(None, now(), &s.items).unwrap();
        assert_eq!(order.total, 2_500_000);
        assert_eq!(order.id, "ORD-BCC-20240312004");
        assert_eq!(order.payment_due, NaiveDate::from_ymd_opt(2024, 3, 26).unwrap());
    }

    #[test]
    fn test_edit_keeps_id_and_date() {
        let s = state();
        let original = s.items[1].clone();
        let mut form = OrderForm::from_order(&original);
        form.status = OrderStatus::Delivered.code().to_string();
        let order = form.to_order(Some(&original), now(), &s.items).unwrap();
        assert_eq!(order.id, original.id);
        assert_eq!(order.order_date, original.order_date);
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.total, 3_750_000);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let s = state();
        let mut form = OrderForm::for_new(now());
        form.customer_name = "La Brisa".to_string();
        form.items = vec![item("Pale Ale", "0", "250000")];
        assert!(form.to_order(None, now(), &s.items).is_err());
    }

    #[test]
    fn test_delete_order() {
        let mut s = state();
        s.remove("ORD-LBR-202409293002");
        assert_eq!(s.view.total_records, 2);
    }

    #[test]
    fn test_known_customers_unique() {
        let s = state();
        assert_eq!(known_customers(&s.items).len(), 3);
    }
}
