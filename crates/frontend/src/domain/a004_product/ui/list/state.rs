use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use contracts::domain::a004_product::{mock_products, Product};
use contracts::domain::common::next_id;
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a004_product";

#[derive(Clone, Debug, PartialEq)]
pub enum ProductDialog {
    Add,
    Edit(i64),
    Delete(i64),
    ImageManager(i64),
    TaxSettings,
}

pub type ProductListState = ListState<Product, ProductDialog>;

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ListState::load(mock_products(), TABLE_KEY, &table_defaults(TABLE_KEY)))
}

pub fn availability_options() -> Vec<(String, String)> {
    vec![
        ("available".to_string(), "Available".to_string()),
        ("unavailable".to_string(), "Unavailable".to_string()),
    ]
}

/// Промо-период для таблицы
pub fn promotion_period(product: &Product) -> String {
    match (product.promotional_start, product.promotional_end) {
        (Some(start), Some(end)) => {
            format!("{} - {}", start.format("%d.%m.%Y"), end.format("%d.%m.%Y"))
        }
        (Some(start), None) => format!("From {}", start.format("%d.%m.%Y")),
        _ => "No promotion".to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub is_available: bool,
    pub is_foc: bool,
    pub promotional_start: String,
    pub promotional_end: String,
}

impl ProductForm {
    pub fn for_new() -> Self {
        Self {
            price: "0".to_string(),
            is_available: true,
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            is_available: product.is_available,
            is_foc: product.is_foc,
            promotional_start: form_utils::date_input_value(product.promotional_start),
            promotional_end: form_utils::date_input_value(product.promotional_end),
        }
    }

    /// Изображения и миниатюра редактируемого товара сохраняются
    pub fn to_product(&self, editing: Option<&Product>, existing: &[Product]) -> FieldResult<Product> {
        let name = form_utils::required("Product Name", &self.name)?;
        let price = form_utils::amount("Price", &self.price)?;
        let promotional_start = form_utils::optional_date("Promotion Start", &self.promotional_start)?;
        let promotional_end = form_utils::optional_date("Promotion End", &self.promotional_end)?;
        match (promotional_start, promotional_end) {
            (None, Some(_)) => {
                return Err("Promotion End requires Promotion Start".to_string());
            }
            (Some(start), Some(end)) if end < start => {
                return Err("Promotion End must not be before Promotion Start".to_string());
            }
            _ => {}
        }

        let (id, images, thumbnail_index) = match editing {
            Some(p) => (p.id, p.images.clone(), p.thumbnail_index),
            None => (next_id(existing.iter().map(|p| p.id)), Vec::new(), 0),
        };

        Ok(Product {
            id,
            name,
            description: self.description.trim().to_string(),
            price,
            images,
            thumbnail_index,
            is_available: self.is_available,
            is_foc: self.is_foc,
            promotional_start,
            promotional_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ProductListState {
        ListState::load(mock_products(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    fn ids(s: &ProductListState) -> Vec<i64> {
        s.view.visible_records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut s = state();
        s.toggle_sort("price");
        s.toggle_sort("price");
        assert_eq!(s.view.visible_records[0].name, "Cerveza");
    }

    #[test]
    fn test_filter_unavailable() {
        let mut s = state();
        s.update_item("3", |p| p.is_available = false);
        s.set_status_filter(Some("unavailable".to_string()));
        assert_eq!(ids(&s), vec![3]);
    }

    #[test]
    fn test_promotion_period_labels() {
        let s = state();
        let pale_ale = s.find("1").unwrap();
        assert_eq!(promotion_period(pale_ale), "No promotion");
        let cerveza = s.find("2").unwrap();
        assert_eq!(promotion_period(cerveza), "01.03.2024 - 31.03.2024");
    }

    #[test]
    fn test_new_product() {
        let mut s = state();
        let mut form = ProductForm::for_new();
        form.name = "Lager".to_string();
        form.price = "Rp 300.000".to_string();
        let product = form.to_product(None, &s.items).unwrap();
        assert_eq!(product.id, 4);
        assert_eq!(product.price, 300_000);
        assert!(product.images.is_empty());
        s.upsert(product);
        assert_eq!(s.view.total_records, 4);
        assert!(ids(&s).contains(&4));
    }

    #[test]
    fn test_edit_keeps_images() {
        let s = state();
        let original = s.find("1").unwrap().clone();
        let mut form = ProductForm::from_product(&original);
        form.is_available = false;
        let product = form.to_product(Some(&original), &s.items).unwrap();
        assert_eq!(product.images, original.images);
        assert!(!product.is_available);
    }

    #[test]
    fn test_promotion_range_validated() {
        let s = state();
        let mut form = ProductForm::for_new();
        form.name = "Lager".to_string();
        form.promotional_start = "2024-04-10".to_string();
        form.promotional_end = "2024-04-01".to_string();
        assert!(form.to_product(None, &s.items).is_err());

        form.promotional_start.clear();
        assert!(form.to_product(None, &s.items).is_err());
    }
}
