use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use contracts::domain::a003_order::Order;
use contracts::domain::a006_delivery::{mock_deliveries, DeliveryBatch, DeliveryStatus, COORDINATORS};
use contracts::domain::common::next_id;
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a006_delivery";

#[derive(Clone, Debug, PartialEq)]
pub enum DeliveryDialog {
    Add,
    Edit(i64),
    AreaManagement,
}

pub type DeliveryListState = ListState<DeliveryBatch, DeliveryDialog>;

pub fn create_state() -> RwSignal<DeliveryListState> {
    RwSignal::new(ListState::load(mock_deliveries(), TABLE_KEY, &table_defaults(TABLE_KEY)))
}

/// Вкладки статусов: (фильтр, подпись); `None` означает все партии
pub fn status_tabs() -> Vec<(Option<String>, &'static str)> {
    let mut tabs = vec![(None, "All Deliveries")];
    tabs.extend(
        DeliveryStatus::all()
            .into_iter()
            .map(|s| (Some(s.code().to_lowercase()), s.code())),
    );
    tabs
}

/// Подпись кнопки перевода партии на следующий этап
pub fn advance_label(status: DeliveryStatus) -> Option<&'static str> {
    match status.next()? {
        DeliveryStatus::InProgress => Some("Set In Progress"),
        DeliveryStatus::Delivered => Some("Set Delivered"),
        DeliveryStatus::Pending => None,
    }
}

/// Переводит партию `key` на следующий этап
pub fn advance_batch(state: &mut DeliveryListState, key: &str) {
    state.update_item(key, |batch| {
        if batch.advance() {
            log::info!("delivery {} moved to {}", batch.batch_id, batch.status.code());
        }
    });
}

/// Заказы, сгруппированные по клиенту в порядке первого появления
pub fn orders_by_customer(orders: &[Order]) -> Vec<(String, Vec<Order>)> {
    let mut groups: Vec<(String, Vec<Order>)> = Vec::new();
    for order in orders {
        match groups.iter_mut().find(|(name, _)| *name == order.customer_name) {
            Some((_, group)) => group.push(order.clone()),
            None => groups.push((order.customer_name.clone(), vec![order.clone()])),
        }
    }
    groups
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeliveryForm {
    pub orders: Vec<String>,
    pub planned_date: String,
    pub area: String,
    pub coordinator: String,
    pub status: String,
}

impl DeliveryForm {
    pub fn for_new(default_area: Option<&str>) -> Self {
        Self {
            area: default_area.unwrap_or_default().to_string(),
            coordinator: COORDINATORS.first().copied().unwrap_or_default().to_string(),
            status: DeliveryStatus::Pending.code().to_string(),
            ..Self::default()
        }
    }

    pub fn from_batch(batch: &DeliveryBatch) -> Self {
        Self {
            orders: batch.orders.clone(),
            planned_date: form_utils::date_input_value(Some(batch.planned_date)),
            area: batch.area.clone(),
            coordinator: batch.coordinator.clone(),
            status: batch.status.code().to_string(),
        }
    }

    /// Клиенты партии берутся из выбранных заказов; адреса
    /// редактируемой партии сохраняются
    pub fn to_batch(
        &self,
        editing: Option<&DeliveryBatch>,
        existing: &[DeliveryBatch],
        catalog: &[Order],
    ) -> FieldResult<DeliveryBatch> {
        if self.orders.is_empty() {
            return Err("Select at least one order".to_string());
        }
        let planned_date = form_utils::date("Planned Date", &self.planned_date)?;
        let area = form_utils::required("Area", &self.area)?;
        let coordinator = form_utils::required("Coordinator", &self.coordinator)?;
        let status = DeliveryStatus::from_code(&self.status)
            .ok_or_else(|| format!("Unknown delivery status: {}", self.status))?;

        let mut customer_names: Vec<String> = Vec::new();
        for order_id in &self.orders {
            let customer = catalog
                .iter()
                .find(|o| &o.id == order_id)
                .map(|o| o.customer_name.clone())
                .ok_or_else(|| format!("Unknown order: {}", order_id))?;
            if !customer_names.contains(&customer) {
                customer_names.push(customer);
            }
        }

        let (id, batch_id, addresses) = match editing {
            Some(b) => (b.id, b.batch_id.clone(), b.addresses.clone()),
            None => {
                let id = next_id(existing.iter().map(|b| b.id));
                (id, format!("BATCH-{:03}", id), Vec::new())
            }
        };

        Ok(DeliveryBatch {
            id,
            batch_id,
            orders: self.orders.clone(),
            coordinator,
            area,
            status,
            planned_date,
            customer_names,
            addresses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_order::mock_orders;

    fn state() -> DeliveryListState {
        ListState::load(mock_deliveries(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    fn ids(s: &DeliveryListState) -> Vec<i64> {
        s.view.visible_records.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_tabs_filter_by_status() {
        let mut s = state();
        let tabs = status_tabs();
        assert_eq!(tabs.len(), 4);
        s.set_status_filter(tabs[2].0.clone());
        assert_eq!(ids(&s), vec![2]);
        s.set_status_filter(tabs[0].0.clone());
        assert_eq!(ids(&s), vec![3, 1, 2]);
    }

    #[test]
    fn test_advance_moves_between_tabs() {
        let mut s = state();
        s.set_status_filter(Some("pending".to_string()));
        assert_eq!(ids(&s), vec![1]);
        advance_batch(&mut s, "1");
        assert!(ids(&s).is_empty());
        assert_eq!(s.find("1").map(|b| b.status), Some(DeliveryStatus::InProgress));
    }

    #[test]
    fn test_advance_labels() {
        assert_eq!(advance_label(DeliveryStatus::Pending), Some("Set In Progress"));
        assert_eq!(advance_label(DeliveryStatus::InProgress), Some("Set Delivered"));
        assert_eq!(advance_label(DeliveryStatus::Delivered), None);
    }

    #[test]
    fn test_new_batch_from_orders() {
        let s = state();
        let catalog = mock_orders().unwrap();
        let mut form = DeliveryForm::for_new(Some("Uluwatu"));
        form.orders = vec![catalog[0].id.clone(), catalog[2].id.clone()];
        form.planned_date = "2024-03-20".to_string();
        let batch = form.to_batch(None, &s.items, &catalog).unwrap();
        assert_eq!(batch.batch_id, "BATCH-004");
        assert_eq!(batch.customer_names, vec!["Beach Club Canggu", "Single Fin"]);
        assert_eq!(batch.coordinator, "John Smith");
        assert_eq!(batch.status, DeliveryStatus::Pending);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let s = state();
        let form = DeliveryForm::for_new(None);
        assert!(form.to_batch(None, &s.items, &[]).is_err());
    }

    #[test]
    fn test_group_orders() {
        let groups = orders_by_customer(&mock_orders().unwrap());
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, "Beach Club Canggu");
    }
}
