use super::list::state::{discount_type_options, PromotionForm, PromotionListState};
use crate::shared::components::dialog_frame::{form_error, DialogFooter, DialogFrame};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::ui::{FormInput, FormSelect, FormTextarea};
use chrono::Utc;
use contracts::domain::a004_product::{mock_products, Product};
use contracts::domain::a005_promotion::Promotion;
use contracts::domain::common::toggle_id;
use leptos::prelude::*;

fn catalog() -> Vec<Product> {
    mock_products().unwrap_or_else(|e| {
        log::error!("product catalog unavailable: {}", e);
        Vec::new()
    })
}

/// Добавление (`editing = None`) или редактирование акции
#[component]
pub fn PromotionFormDialog(
    state: RwSignal<PromotionListState>,
    #[prop(optional)]
    editing: Option<Promotion>,
) -> impl IntoView {
    let today = Utc::now().date_naive();
    let edit_id = editing.as_ref().map(|p| p.id);
    let initial = editing
        .as_ref()
        .map(PromotionForm::from_promotion)
        .unwrap_or_else(|| PromotionForm::for_new(today));
    let (title, confirm_label) = if edit_id.is_some() {
        ("Edit Promotion", "Update Promotion")
    } else {
        ("Create Promotion", "Create Promotion")
    };

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let start_date = RwSignal::new(initial.start_date);
    let end_date = RwSignal::new(initial.end_date);
    let discount_type = RwSignal::new(initial.discount_type);
    let discount_value = RwSignal::new(initial.discount_value);
    let products = RwSignal::new(initial.products);
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = PromotionForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            discount_type: discount_type.get_untracked(),
            discount_value: discount_value.get_untracked(),
            products: products.get_untracked(),
        };
        match state.with_untracked(|s| form.to_promotion(edit_id, today, &s.items)) {
            Ok(promotion) => {
                log::info!("promotion saved: id={} status={}", promotion.id, promotion.status.code());
                state.update(|s| s.upsert(promotion));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let product_checklist = catalog()
        .into_iter()
        .map(|product| {
            let id = product.id;
            view! {
                <label class="form__checkbox-label">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || products.with(|ids| ids.contains(&id))
                        on:change=move |_| products.update(|ids| toggle_id(ids, id))
                    />
                    {format!("{} ({})", product.name, format_rupiah(product.price))}
                </label>
            }
        })
        .collect_view();

    view! {
        <DialogFrame title=title on_close=close>
            <FormInput label="Promotion Name" value=name required=true />
            <FormTextarea label="Description" value=description rows=2 />
            <div class="form__row">
                <FormInput label="Start Date" value=start_date input_type="date" />
                <FormInput label="End Date" value=end_date input_type="date" />
            </div>
            <div class="form__row">
                <FormSelect label="Discount Type" value=discount_type options=discount_type_options() />
                <FormInput label="Discount Value" value=discount_value />
            </div>
            <div class="form__group">
                <label class="form__label">"Products"</label>
                {product_checklist}
            </div>
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}
