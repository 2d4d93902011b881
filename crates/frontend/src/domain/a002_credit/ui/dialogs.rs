use super::list::state::{utilization_bar_class, utilization_bar_width, CreditListState};
use crate::shared::components::dialog_frame::{form_error, DialogFooter, DialogFrame};
use crate::shared::components::table::{format_percent, format_rupiah};
use crate::shared::components::ui::FormInput;
use crate::shared::form_utils;
use contracts::domain::a002_credit::{CreditAccount, CreditSettings};
use leptos::prelude::*;

/// Значения по умолчанию для новых кредитных счетов
#[component]
pub fn GlobalSettingsDialog(
    state: RwSignal<CreditListState>,
    settings: RwSignal<CreditSettings>,
) -> impl IntoView {
    let current = settings.get_untracked();
    let limit = RwSignal::new(format_rupiah(current.default_credit_limit));
    let terms = RwSignal::new(current.default_payment_terms.to_string());
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let parsed = form_utils::amount("Default Credit Limit", &limit.get_untracked()).and_then(
            |default_credit_limit| {
                form_utils::count("Default Payment Terms", &terms.get_untracked()).map(
                    |default_payment_terms| CreditSettings {
                        default_credit_limit,
                        default_payment_terms,
                    },
                )
            },
        );
        match parsed {
            Ok(new_settings) => {
                log::info!("credit settings updated: {:?}", new_settings);
                settings.set(new_settings);
                state.update(|s| s.close_dialog());
            }
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Global Credit Settings" on_close=close>
            <FormInput label="Default Credit Limit" value=limit />
            <FormInput label="Default Payment Terms (days)" value=terms input_type="number" />
            {form_error(error)}
            <DialogFooter confirm_label="Update Global Settings" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

/// Текущая загрузка лимита: использовано, лимит и полоса
fn utilization_summary(account: &CreditAccount) -> impl IntoView {
    view! {
        <div class="credit-summary">
            <div class="credit-summary__row">
                <span>"Used"</span>
                <strong>{format_rupiah(account.credit_utilization)}</strong>
            </div>
            <div class="credit-summary__row">
                <span>"From Total Limit"</span>
                <span>{format_rupiah(account.credit_limit)}</span>
            </div>
            <div class="progress">
                <div
                    class=utilization_bar_class(account.utilization_level())
                    style=utilization_bar_width(account)
                ></div>
            </div>
            <div class="credit-summary__scale">
                <span>"0%"</span>
                <span>{format_percent(account.utilization_percent())}</span>
                <span>"100%"</span>
            </div>
        </div>
    }
}

#[component]
pub fn CreditLimitDialog(state: RwSignal<CreditListState>, account: CreditAccount) -> impl IntoView {
    let key = account.id.to_string();
    let value = RwSignal::new(format_rupiah(account.credit_limit));
    let error = RwSignal::new(None::<String>);
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        match form_utils::amount("Credit Limit", &value.get_untracked()) {
            Ok(limit) => {
                log::info!("credit limit updated: id={} limit={}", key, limit);
                state.update(|s| s.update_item(&key, |a| a.credit_limit = limit));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Manage Credit Limit" on_close=close>
            <label class="form__label">"Current Credit Utilization"</label>
            {utilization_summary(&account)}
            <FormInput label="Credit Limit" value=value />
            {form_error(error)}
            <DialogFooter confirm_label="Update Credit Limit" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn CreditTermsDialog(state: RwSignal<CreditListState>, account: CreditAccount) -> impl IntoView {
    let key = account.id.to_string();
    let value = RwSignal::new(account.payment_terms.to_string());
    let error = RwSignal::new(None::<String>);
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        match form_utils::count("Payment Terms", &value.get_untracked()) {
            Ok(days) => state.update(|s| s.update_item(&key, |a| a.payment_terms = days)),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Edit Payment Terms" on_close=close>
            <p>{account.name}</p>
            <FormInput label="Payment Terms (days)" value=value input_type="number" />
            {form_error(error)}
            <DialogFooter confirm_label="Update Terms" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}
