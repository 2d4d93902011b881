use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{load_mock, toggle_id};
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

/// Тип скидки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Процент от цены
    Percentage,
    /// Фиксированная сумма, Rp
    Fixed,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage (%)",
            DiscountType::Fixed => "Fixed Amount (Rp)",
        }
    }

    pub fn all() -> Vec<DiscountType> {
        vec![DiscountType::Percentage, DiscountType::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Статус акции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    Scheduled,
    Active,
    Ended,
}

impl PromotionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PromotionStatus::Scheduled => "scheduled",
            PromotionStatus::Active => "active",
            PromotionStatus::Ended => "ended",
        }
    }

    pub fn all() -> Vec<PromotionStatus> {
        vec![
            PromotionStatus::Scheduled,
            PromotionStatus::Active,
            PromotionStatus::Ended,
        ]
    }

    /// Статус по периоду акции на указанную дату
    pub fn for_period(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today < start {
            PromotionStatus::Scheduled
        } else if today > end {
            PromotionStatus::Ended
        } else {
            PromotionStatus::Active
        }
    }
}

/// Акция на набор товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount_type: DiscountType,
    pub discount_value: i64,
    pub status: PromotionStatus,
    /// Идентификаторы товаров, участвующих в акции
    #[serde(default)]
    pub products: Vec<i64>,
}

impl Promotion {
    /// Цена товара со скидкой, не ниже нуля
    pub fn discounted_price(&self, price: i64) -> i64 {
        let discounted = match self.discount_type {
            DiscountType::Percentage => {
                price - (price as f64 * self.discount_value as f64 / 100.0).round() as i64
            }
            DiscountType::Fixed => price - self.discount_value,
        };
        discounted.max(0)
    }

    pub fn applies_to(&self, product_id: i64) -> bool {
        self.products.contains(&product_id)
    }

    /// Переключение товара в составе акции (для формы редактирования)
    pub fn toggle_product(&mut self, product_id: i64) {
        toggle_id(&mut self.products, product_id);
    }
}

impl TableRecord for Promotion {
    fn record_key(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "start_date" => self.start_date.into(),
            "end_date" => self.end_date.into(),
            "discount_type" => self.discount_type.code().into(),
            "discount_value" => self.discount_value.into(),
            "status" => self.status.code().into(),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.code().to_string())
    }
}

pub fn mock_promotions() -> anyhow::Result<Vec<Promotion>> {
    load_mock("a005_promotion", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view, PageSpec, SortSpec};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_sort_by_start_date() {
        let promotions = mock_promotions().unwrap();
        let view = compute_view(&promotions, &SortSpec::asc("start_date"), &PageSpec::first(10)).unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_discounted_price() {
        let promotions = mock_promotions().unwrap();
        assert_eq!(promotions[0].discounted_price(250_000), 200_000);
        assert_eq!(promotions[1].discounted_price(1_500_000), 1_400_000);
        assert_eq!(promotions[1].discounted_price(50_000), 0);
    }

    #[test]
    fn test_status_for_period() {
        let start = date(2024, 3, 1);
        let end = date(2024, 3, 31);
        assert_eq!(PromotionStatus::for_period(start, end, date(2024, 2, 28)), PromotionStatus::Scheduled);
        assert_eq!(PromotionStatus::for_period(start, end, date(2024, 3, 31)), PromotionStatus::Active);
        assert_eq!(PromotionStatus::for_period(start, end, date(2024, 4, 1)), PromotionStatus::Ended);
    }

    #[test]
    fn test_toggle_product() {
        let mut promotion = mock_promotions().unwrap().remove(0);
        assert!(promotion.applies_to(2));
        promotion.toggle_product(2);
        assert!(!promotion.applies_to(2));
        promotion.toggle_product(3);
        assert_eq!(promotion.products, vec![1, 3]);
    }
}
