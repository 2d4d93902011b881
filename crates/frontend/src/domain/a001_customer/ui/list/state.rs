use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use contracts::domain::a001_customer::{mock_customers, Customer};
use contracts::domain::common::next_id;
use contracts::enums::ActivityStatus;
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a001_customer";

/// Диалоги страницы клиентов; все, кроме Add, относятся к записи `id`
#[derive(Clone, Debug, PartialEq)]
pub enum CustomerDialog {
    Add,
    Edit(i64),
    Delete(i64),
    ResetPassword(i64),
    CreditLimit(i64),
    PaymentTerms(i64),
    Notes(i64),
}

pub type CustomerListState = ListState<Customer, CustomerDialog>;

pub fn create_state() -> RwSignal<CustomerListState> {
    RwSignal::new(ListState::load(
        mock_customers(),
        TABLE_KEY,
        &table_defaults(TABLE_KEY),
    ))
}

/// Значения формы добавления/редактирования клиента
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub credit_limit: String,
    pub payment_terms: String,
    pub status: String,
    pub promo_notes: String,
}

impl CustomerForm {
    pub fn for_new() -> Self {
        Self {
            credit_limit: "0".to_string(),
            payment_terms: "30".to_string(),
            status: ActivityStatus::Active.code().to_string(),
            ..Self::default()
        }
    }

    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            credit_limit: customer.credit_limit.to_string(),
            payment_terms: customer.payment_terms.to_string(),
            status: customer.status.code().to_string(),
            promo_notes: customer.promo_notes.clone(),
        }
    }

    /// Собирает клиента; `id = None` для нового (следующий свободный id)
    pub fn to_customer(&self, id: Option<i64>, existing: &[Customer]) -> FieldResult<Customer> {
        let name = form_utils::required("Name", &self.name)?;
        let email = form_utils::email(&self.email)?;
        let credit_limit = form_utils::amount("Credit Limit", &self.credit_limit)?;
        let payment_terms = form_utils::count("Payment Terms", &self.payment_terms)?;
        let status = ActivityStatus::from_code(&self.status)
            .ok_or_else(|| format!("Unknown status '{}'", self.status))?;
        let id = id.unwrap_or_else(|| next_id(existing.iter().map(|c| c.id)));

        Ok(Customer::new_for_insert(
            id,
            name,
            email,
            credit_limit,
            payment_terms,
            status,
            self.promo_notes.trim().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> CustomerListState {
        ListState::load(mock_customers(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    #[test]
    fn test_initial_view_sorted_by_name() {
        let state = loaded();
        let names: Vec<&str> = state
            .view
            .visible_records
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ahmad Wijaya", "Budi Santoso", "Siti Rahayu"]);
        assert_eq!(state.view.range_start, 1);
        assert_eq!(state.view.range_end, 3);
    }

    #[test]
    fn test_status_filter_inactive() {
        let mut state = loaded();
        state.set_status_filter(Some("inactive".to_string()));
        assert_eq!(state.view.total_records, 1);
        assert_eq!(state.view.visible_records[0].name, "Ahmad Wijaya");
    }

    #[test]
    fn test_sort_by_credit_limit_desc() {
        let mut state = loaded();
        state.toggle_sort("credit_limit");
        state.toggle_sort("credit_limit");
        let ids: Vec<i64> = state.view.visible_records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_customer_from_form() {
        let mut state = loaded();
        let form = CustomerForm {
            name: "Dewi Lestari".to_string(),
            email: "dewi@example.com".to_string(),
            credit_limit: "Rp 10.000.000".to_string(),
            ..CustomerForm::for_new()
        };
        let customer = form.to_customer(None, &state.items).unwrap();
        assert_eq!(customer.id, 4);
        assert_eq!(customer.avatar, "DL");
        assert_eq!(customer.credit_limit, 10_000_000);

        state.upsert(customer);
        assert_eq!(state.view.total_records, 4);
    }

    #[test]
    fn test_edit_keeps_id() {
        let state = loaded();
        let original = state.find("2").cloned().unwrap();
        let mut form = CustomerForm::from_customer(&original);
        form.payment_terms = "45".to_string();
        let edited = form.to_customer(Some(original.id), &state.items).unwrap();
        assert_eq!(edited.id, 2);
        assert_eq!(edited.payment_terms, 45);
    }

    #[test]
    fn test_form_rejects_bad_email() {
        let form = CustomerForm {
            name: "X".to_string(),
            email: "nope".to_string(),
            ..CustomerForm::for_new()
        };
        assert!(form.to_customer(None, &[]).is_err());
    }
}
