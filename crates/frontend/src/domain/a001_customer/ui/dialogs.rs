//! Диалоги страницы клиентов. Изменения применяются только к списку
//! на странице.

use super::list::state::{CustomerForm, CustomerListState};
use crate::shared::components::dialog_frame::{form_error, ConfirmDialog, DialogFooter, DialogFrame};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::ui::{FormInput, FormSelect, FormTextarea};
use crate::shared::form_utils;
use contracts::domain::a001_customer::Customer;
use contracts::enums::ActivityStatus;
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    ActivityStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect()
}

/// Добавление (`editing = None`) или редактирование клиента
#[component]
pub fn CustomerFormDialog(
    state: RwSignal<CustomerListState>,
    #[prop(optional)]
    editing: Option<Customer>,
) -> impl IntoView {
    let edit_id = editing.as_ref().map(|c| c.id);
    let initial = editing
        .as_ref()
        .map(CustomerForm::from_customer)
        .unwrap_or_else(CustomerForm::for_new);

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let credit_limit = RwSignal::new(initial.credit_limit);
    let payment_terms = RwSignal::new(initial.payment_terms);
    let status = RwSignal::new(initial.status);
    let promo_notes = RwSignal::new(initial.promo_notes);
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = CustomerForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            credit_limit: credit_limit.get_untracked(),
            payment_terms: payment_terms.get_untracked(),
            status: status.get_untracked(),
            promo_notes: promo_notes.get_untracked(),
        };
        match state.with_untracked(|s| form.to_customer(edit_id, &s.items)) {
            Ok(customer) => {
                log::info!("customer saved: id={}", customer.id);
                state.update(|s| s.upsert(customer));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let (title, confirm_label) = if edit_id.is_some() {
        ("Edit Customer", "Save Changes")
    } else {
        ("Add New Customer", "Add Customer")
    };

    view! {
        <DialogFrame title=title on_close=close>
            <FormInput label="Name" value=name required=true />
            <FormInput label="Email" value=email input_type="email" required=true />
            <FormInput label="Credit Limit (Rp)" value=credit_limit />
            <FormInput label="Payment Terms (days)" value=payment_terms input_type="number" />
            <FormSelect label="Status" value=status options=status_options() />
            <FormTextarea label="Promotional Notes" value=promo_notes />
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn DeleteCustomerDialog(state: RwSignal<CustomerListState>, customer: Customer) -> impl IntoView {
    let key = customer.id.to_string();
    view! {
        <ConfirmDialog
            title="Delete Customer"
            message=format!("Are you sure you want to delete {}? This cannot be undone.", customer.name)
            confirm_label="Delete"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("customer deleted: id={}", key);
                state.update(|s| s.remove(&key));
            })
        />
    }
}

/// Отправка письма для сброса пароля; в демо только журналируется
#[component]
pub fn ResetPasswordDialog(state: RwSignal<CustomerListState>, customer: Customer) -> impl IntoView {
    let email = customer.email.clone();
    view! {
        <ConfirmDialog
            title="Send Password Reset"
            message=format!("Send password reset email to {}?", customer.email)
            confirm_label="Send Reset Email"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("password reset requested for {}", email);
                state.update(|s| s.close_dialog());
            })
        />
    }
}

#[component]
pub fn CreditLimitDialog(state: RwSignal<CustomerListState>, customer: Customer) -> impl IntoView {
    let key = customer.id.to_string();
    let value = RwSignal::new(format_rupiah(customer.credit_limit));
    let error = RwSignal::new(None::<String>);
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        match form_utils::amount("Credit Limit", &value.get_untracked()) {
            Ok(limit) => state.update(|s| s.update_item(&key, |c| c.credit_limit = limit)),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Manage Credit Limit" on_close=close>
            <p>{customer.name}</p>
            <FormInput label="Credit Limit" value=value />
            {form_error(error)}
            <DialogFooter confirm_label="Update" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn PaymentTermsDialog(state: RwSignal<CustomerListState>, customer: Customer) -> impl IntoView {
    let key = customer.id.to_string();
    let value = RwSignal::new(customer.payment_terms.to_string());
    let error = RwSignal::new(None::<String>);
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        match form_utils::count("Payment Terms", &value.get_untracked()) {
            Ok(days) => state.update(|s| s.update_item(&key, |c| c.payment_terms = days)),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Edit Payment Terms" on_close=close>
            <p>{customer.name}</p>
            <FormInput label="Payment Terms (days)" value=value input_type="number" />
            {form_error(error)}
            <DialogFooter confirm_label="Update" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn NotesDialog(state: RwSignal<CustomerListState>, customer: Customer) -> impl IntoView {
    let key = customer.id.to_string();
    let value = RwSignal::new(customer.promo_notes.clone());
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let notes = value.get_untracked().trim().to_string();
        state.update(|s| s.update_item(&key, |c| c.promo_notes = notes));
    });

    view! {
        <DialogFrame title="Edit Promotional Notes" on_close=close>
            <p>{customer.name}</p>
            <FormTextarea label="Promotional Notes" value=value />
            <DialogFooter confirm_label="Update" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}
