use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::load_mock;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

/// Координаторы доставки
pub const COORDINATORS: &[&str] = &[
    "John Smith",
    "Sarah Jones",
    "Mike Chen",
    "Lisa Wong",
    "Tom Brown",
];

/// Районы доставки по умолчанию
pub const DEFAULT_AREAS: &[&str] = &["Canggu", "Seminyak", "Jimbaran", "Uluwatu", "Kuta"];

/// Статус партии доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Delivered,
}

impl DeliveryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InProgress => "In Progress",
            DeliveryStatus::Delivered => "Delivered",
        }
    }

    pub fn all() -> Vec<DeliveryStatus> {
        vec![
            DeliveryStatus::Pending,
            DeliveryStatus::InProgress,
            DeliveryStatus::Delivered,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Следующий статус по процессу доставки
    pub fn next(&self) -> Option<DeliveryStatus> {
        match self {
            DeliveryStatus::Pending => Some(DeliveryStatus::InProgress),
            DeliveryStatus::InProgress => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered => None,
        }
    }
}

/// Партия доставки: несколько заказов по одному району
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryBatch {
    pub id: i64,
    pub batch_id: String,
    /// Номера заказов в партии
    #[serde(default)]
    pub orders: Vec<String>,
    pub coordinator: String,
    pub area: String,
    pub status: DeliveryStatus,
    pub planned_date: NaiveDate,
    #[serde(default)]
    pub customer_names: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl DeliveryBatch {
    /// Перевести партию на следующий этап; возвращает `false`, если она уже доставлена
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl TableRecord for DeliveryBatch {
    fn record_key(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.into(),
            "batch_id" => self.batch_id.as_str().into(),
            "coordinator" => self.coordinator.as_str().into(),
            "area" => self.area.as_str().into(),
            "status" => self.status.code().into(),
            "planned_date" => self.planned_date.into(),
            "order_count" => (self.orders.len() as i64).into(),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.batch_id,
            self.coordinator,
            self.area,
            self.customer_names.join(" ")
        )
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.code().to_string())
    }
}

/// Список районов доставки, редактируемый на странице
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAreas(Vec<String>);

impl Default for DeliveryAreas {
    fn default() -> Self {
        Self(DEFAULT_AREAS.iter().map(|a| a.to_string()).collect())
    }
}

impl DeliveryAreas {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Добавляет район; пустые названия и дубликаты (без учёта регистра) пропускаются
    pub fn add(&mut self, area: &str) -> bool {
        let area = area.trim();
        if area.is_empty() || self.0.iter().any(|a| a.eq_ignore_ascii_case(area)) {
            return false;
        }
        self.0.push(area.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }
}

pub fn mock_deliveries() -> anyhow::Result<Vec<DeliveryBatch>> {
    load_mock("a006_delivery", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view_filtered, PageSpec, RecordFilter, SortSpec};

    #[test]
    fn test_status_tab_filter() {
        let deliveries = mock_deliveries().unwrap();
        let pending = RecordFilter::new("", Some("pending".to_string()));
        let view = compute_view_filtered(&deliveries, &pending, &SortSpec::asc("planned_date"), &PageSpec::first(10)).unwrap();
        assert_eq!(view.total_records, 1);
        assert_eq!(view.visible_records[0].batch_id, "BATCH-001");

        let in_progress = RecordFilter::new("", Some("in progress".to_string()));
        let view = compute_view_filtered(&deliveries, &in_progress, &SortSpec::asc("planned_date"), &PageSpec::first(10)).unwrap();
        assert_eq!(view.visible_records[0].batch_id, "BATCH-002");
    }

    #[test]
    fn test_all_tab_sorted_by_planned_date() {
        let deliveries = mock_deliveries().unwrap();
        let view = compute_view_filtered(
            &deliveries,
            &RecordFilter::default(),
            &SortSpec::asc("planned_date"),
            &PageSpec::first(10),
        )
        .unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|d| d.id).collect();
        // 14-е раньше, 15-е в исходном порядке
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_advance() {
        let mut batch = mock_deliveries().unwrap().remove(0);
        assert!(batch.advance());
        assert_eq!(batch.status, DeliveryStatus::InProgress);
        assert!(batch.advance());
        assert!(!batch.advance());
        assert_eq!(batch.status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_areas() {
        let mut areas = DeliveryAreas::default();
        assert!(!areas.add("kuta"));
        assert!(!areas.add("   "));
        assert!(areas.add("Ubud"));
        assert_eq!(areas.as_slice().len(), 6);
        assert_eq!(areas.remove(0), Some("Canggu".to_string()));
        assert_eq!(areas.remove(10), None);
    }
}
