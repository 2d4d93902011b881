use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::load_mock;
use crate::shared::table_view::{FieldValue, TableRecord};

const MOCK_JSON: &str = include_str!("mock.json");

/// НДС (PPN) по умолчанию, %
pub const DEFAULT_TAX_RATE: u32 = 11;

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Цена без налога, Rp
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail_index: usize,
    pub is_available: bool,
    /// Бесплатный товар (free of charge)
    #[serde(rename = "isFoC")]
    pub is_foc: bool,
    pub promotional_start: Option<NaiveDate>,
    pub promotional_end: Option<NaiveDate>,
}

impl Product {
    /// Изображение-миниатюра; при индексе вне диапазона берется первое изображение
    pub fn thumbnail(&self) -> Option<&str> {
        self.images
            .get(self.thumbnail_index)
            .or_else(|| self.images.first())
            .map(String::as_str)
    }

    /// Действует ли промо-период на указанную дату (границы включительно)
    pub fn is_on_promotion(&self, date: NaiveDate) -> bool {
        match (self.promotional_start, self.promotional_end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start <= date,
            _ => false,
        }
    }

    pub fn add_image(&mut self, url: String) {
        self.images.push(url);
    }

    /// Сделать изображение миниатюрой; индекс вне диапазона игнорируется
    pub fn set_thumbnail(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.thumbnail_index = index;
        true
    }

    /// Удаляет изображение, сохраняя выбранную миниатюру там, где возможно
    pub fn remove_image(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.images.remove(index);
        if index < self.thumbnail_index {
            self.thumbnail_index -= 1;
        } else if index == self.thumbnail_index || self.thumbnail_index >= self.images.len() {
            self.thumbnail_index = 0;
        }
    }

    pub fn availability_code(&self) -> &'static str {
        if self.is_available {
            "available"
        } else {
            "unavailable"
        }
    }
}

impl TableRecord for Product {
    fn record_key(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value: FieldValue = match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.as_str().into(),
            "price" => self.price.into(),
            "is_available" => self.is_available.into(),
            "is_foc" => self.is_foc.into(),
            "promotional_start" => FieldValue::optional(self.promotional_start),
            "promotional_end" => FieldValue::optional(self.promotional_end),
            _ => return None,
        };
        Some(value)
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.availability_code().to_string())
    }
}

/// Налоговые настройки каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSettings {
    /// Ставка, %
    pub tax_rate: u32,
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl TaxSettings {
    /// Цена с налогом, округлённая до целых рупий
    pub fn price_with_tax(&self, price: i64) -> i64 {
        let tax = (price as f64 * f64::from(self.tax_rate) / 100.0).round() as i64;
        price + tax
    }
}

pub fn mock_products() -> anyhow::Result<Vec<Product>> {
    load_mock("a004_product", MOCK_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::{compute_view, PageSpec, SortSpec};

    #[test]
    fn test_mock_loads() {
        let products = mock_products().unwrap();
        assert_eq!(products.len(), 3);
        assert!(products[2].is_foc);
        assert_eq!(products[0].promotional_start, None);
    }

    #[test]
    fn test_sort_by_optional_date_puts_empty_first() {
        let products = mock_products().unwrap();
        let view = compute_view(
            &products,
            &SortSpec::desc("promotional_start"),
            &PageSpec::first(10),
        )
        .unwrap();
        let ids: Vec<i64> = view.visible_records.iter().map(|p| p.id).collect();
        // По убыванию: дата, затем пустые в исходном порядке
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_is_on_promotion() {
        let products = mock_products().unwrap();
        let inside = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let outside = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert!(products[1].is_on_promotion(inside));
        assert!(!products[1].is_on_promotion(outside));
        assert!(!products[0].is_on_promotion(inside));
    }

    #[test]
    fn test_remove_image_keeps_thumbnail() {
        let mut product = mock_products().unwrap().remove(0);
        assert!(product.set_thumbnail(2));
        product.remove_image(0);
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.thumbnail_index, 1);
        assert_eq!(product.thumbnail(), Some("/coffee-beans-3.jpg"));

        product.remove_image(1);
        assert_eq!(product.thumbnail_index, 0);
        assert!(!product.set_thumbnail(5));
    }

    #[test]
    fn test_price_with_tax() {
        let settings = TaxSettings::default();
        assert_eq!(settings.price_with_tax(250_000), 277_500);
        assert_eq!(TaxSettings { tax_rate: 0 }.price_with_tax(100), 100);
    }

    #[test]
    fn test_thumbnail_falls_back_to_first() {
        let mut product = mock_products().unwrap().remove(0);
        product.thumbnail_index = 10;
        assert_eq!(product.thumbnail(), product.images.first().map(String::as_str));
    }
}
