use crate::shared::components::table::format_rupiah;
use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use chrono::NaiveDate;
use contracts::domain::a005_promotion::{mock_promotions, DiscountType, Promotion, PromotionStatus};
use contracts::domain::common::next_id;
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a005_promotion";

#[derive(Clone, Debug, PartialEq)]
pub enum PromotionDialog {
    Add,
    Edit(i64),
}

pub type PromotionListState = ListState<Promotion, PromotionDialog>;

pub fn create_state() -> RwSignal<PromotionListState> {
    RwSignal::new(ListState::load(mock_promotions(), TABLE_KEY, &table_defaults(TABLE_KEY)))
}

pub fn status_label(status: PromotionStatus) -> &'static str {
    match status {
        PromotionStatus::Scheduled => "Scheduled",
        PromotionStatus::Active => "Active",
        PromotionStatus::Ended => "Ended",
    }
}

pub fn status_options() -> Vec<(String, String)> {
    PromotionStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), status_label(s).to_string()))
        .collect()
}

pub fn discount_type_options() -> Vec<(String, String)> {
    DiscountType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect()
}

/// Размер скидки для таблицы: "20%" или "Rp 100.000"
pub fn discount_label(promotion: &Promotion) -> String {
    match promotion.discount_type {
        DiscountType::Percentage => format!("{}%", promotion.discount_value),
        DiscountType::Fixed => format_rupiah(promotion.discount_value),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PromotionForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub discount_type: String,
    pub discount_value: String,
    pub products: Vec<i64>,
}

impl PromotionForm {
    pub fn for_new(today: NaiveDate) -> Self {
        Self {
            start_date: form_utils::date_input_value(Some(today)),
            end_date: form_utils::date_input_value(Some(today)),
            discount_type: DiscountType::Percentage.code().to_string(),
            discount_value: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self {
            name: promotion.name.clone(),
            description: promotion.description.clone(),
            start_date: form_utils::date_input_value(Some(promotion.start_date)),
            end_date: form_utils::date_input_value(Some(promotion.end_date)),
            discount_type: promotion.discount_type.code().to_string(),
            discount_value: promotion.discount_value.to_string(),
            products: promotion.products.clone(),
        }
    }

    /// Статус акции пересчитывается по периоду на дату `today`
    pub fn to_promotion(
        &self,
        id: Option<i64>,
        today: NaiveDate,
        existing: &[Promotion],
    ) -> FieldResult<Promotion> {
        let name = form_utils::required("Promotion Name", &self.name)?;
        let start_date = form_utils::date("Start Date", &self.start_date)?;
        let end_date = form_utils::date("End Date", &self.end_date)?;
        if end_date < start_date {
            return Err("End Date must not be before Start Date".to_string());
        }
        let discount_type = DiscountType::from_code(&self.discount_type)
            .ok_or_else(|| format!("Unknown discount type: {}", self.discount_type))?;
        let discount_value = form_utils::amount("Discount Value", &self.discount_value)?;
        if discount_type == DiscountType::Percentage && discount_value > 100 {
            return Err("Percentage discount must not exceed 100".to_string());
        }
        if self.products.is_empty() {
            return Err("Select at least one product".to_string());
        }

        Ok(Promotion {
            id: id.unwrap_or_else(|| next_id(existing.iter().map(|p| p.id))),
            name,
            description: self.description.trim().to_string(),
            start_date,
            end_date,
            discount_type,
            discount_value,
            status: PromotionStatus::for_period(start_date, end_date, today),
            products: self.products.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PromotionListState {
        ListState::load(mock_promotions(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    fn ids(s: &PromotionListState) -> Vec<i64> {
        s.view.visible_records.iter().map(|p| p.id).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_initial_view_by_start_date() {
        assert_eq!(ids(&state()), vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_active() {
        let mut s = state();
        s.set_status_filter(Some("active".to_string()));
        assert_eq!(ids(&s), vec![3]);
    }

    #[test]
    fn test_discount_labels() {
        let s = state();
        assert_eq!(discount_label(s.find("1").unwrap()), "20%");
        assert_eq!(discount_label(s.find("2").unwrap()), "Rp 100.000");
    }

    #[test]
    fn test_edit_recomputes_status() {
        let mut s = state();
        let original = s.find("1").unwrap().clone();
        let form = PromotionForm::from_promotion(&original);
        let promotion = form.to_promotion(Some(1), today(), &s.items).unwrap();
        assert_eq!(promotion.status, PromotionStatus::Active);
        s.upsert(promotion);
        s.set_status_filter(Some("active".to_string()));
        assert_eq!(ids(&s), vec![3, 1]);
    }

    #[test]
    fn test_new_promotion_validation() {
        let s = state();
        let mut form = PromotionForm::for_new(today());
        form.name = "Weekend Deal".to_string();
        assert!(form.to_promotion(None, today(), &s.items).is_err());

        form.products = vec![2];
        form.discount_value = "150".to_string();
        assert!(form.to_promotion(None, today(), &s.items).is_err());

        form.discount_value = "15".to_string();
        let promotion = form.to_promotion(None, today(), &s.items).unwrap();
        assert_eq!(promotion.id, 4);
        assert_eq!(promotion.status, PromotionStatus::Active);
    }
}
