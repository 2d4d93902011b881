//! Поля форм диалогов. Значение связано с `RwSignal` в обе стороны.

use leptos::prelude::*;

/// Текстовое поле с подписью
#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    /// "text" (default), "email", "number", "date", "password"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_t
                placeholder=input_placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Выпадающий список: options: пары (значение, подпись)
#[component]
pub fn FormSelect(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    let val_for_selected = val.clone();
                    view! {
                        <option value=val selected=move || value.get() == val_for_selected>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn FormTextarea(
    #[prop(into)]
    label: String,
    value: RwSignal<String>,
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn FormCheckbox(
    #[prop(into)]
    label: String,
    checked: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| checked.set(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}
