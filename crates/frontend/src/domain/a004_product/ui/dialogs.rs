use super::list::state::{ProductForm, ProductListState};
use crate::shared::components::dialog_frame::{form_error, ConfirmDialog, DialogFooter, DialogFrame};
use crate::shared::components::ui::{FormCheckbox, FormInput, FormTextarea};
use crate::shared::form_utils;
use crate::shared::icons::icon;
use contracts::domain::a004_product::{Product, TaxSettings};
use leptos::prelude::*;
use thaw::*;

/// Добавление (`editing = None`) или редактирование товара
#[component]
pub fn ProductFormDialog(
    state: RwSignal<ProductListState>,
    #[prop(optional)]
    editing: Option<Product>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(ProductForm::from_product)
        .unwrap_or_else(ProductForm::for_new);
    let (title, confirm_label) = if editing.is_some() {
        ("Edit Product", "Update Product")
    } else {
        ("Add New Product", "Add Product")
    };
    let editing = StoredValue::new(editing);

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(initial.price);
    let is_available = RwSignal::new(initial.is_available);
    let is_foc = RwSignal::new(initial.is_foc);
    let promotional_start = RwSignal::new(initial.promotional_start);
    let promotional_end = RwSignal::new(initial.promotional_end);
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = ProductForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
            is_available: is_available.get_untracked(),
            is_foc: is_foc.get_untracked(),
            promotional_start: promotional_start.get_untracked(),
            promotional_end: promotional_end.get_untracked(),
        };
        let result = editing
            .with_value(|editing| state.with_untracked(|s| form.to_product(editing.as_ref(), &s.items)));
        match result {
            Ok(product) => {
                log::info!("product saved: id={}", product.id);
                state.update(|s| s.upsert(product));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title=title on_close=close>
            <FormInput label="Product Name" value=name required=true />
            <FormTextarea label="Description" value=description />
            <FormInput label="Price" value=price />
            <FormCheckbox label="Available" checked=is_available />
            <div class="form__row">
                <FormInput label="Promotion Start" value=promotional_start input_type="date" />
                <FormInput label="Promotion End" value=promotional_end input_type="date" />
            </div>
            <FormCheckbox label="Free of Charge (FoC)" checked=is_foc />
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn DeleteProductDialog(state: RwSignal<ProductListState>, product: Product) -> impl IntoView {
    let key = product.id.to_string();
    view! {
        <ConfirmDialog
            title="Delete Product"
            message=format!("Delete {} from the catalog?", product.name)
            confirm_label="Delete"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("product deleted: id={}", key);
                state.update(|s| s.remove(&key));
            })
        />
    }
}

/// Изображения товара: добавление по ссылке, выбор миниатюры, удаление.
/// Правки применяются к копии и сохраняются кнопкой "Save Images".
#[component]
pub fn ImageManagerDialog(state: RwSignal<ProductListState>, product: Product) -> impl IntoView {
    let title = format!("Images: {}", product.name);
    let draft = RwSignal::new(product);
    let new_url = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let add_image = move |_| match form_utils::required("Image URL", &new_url.get_untracked()) {
        Ok(url) => {
            draft.update(|p| p.add_image(url));
            new_url.set(String::new());
            error.set(None);
        }
        Err(e) => error.set(Some(e)),
    };

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let product = draft.get_untracked();
        log::info!("product images saved: id={} count={}", product.id, product.images.len());
        state.update(|s| s.upsert(product));
    });

    let gallery = move || {
        let product = draft.get();
        if product.images.is_empty() {
            return view! { <p class="text-muted">"No images yet"</p> }.into_any();
        }
        let thumbnail = product.thumbnail_index;
        product
            .images
            .into_iter()
            .enumerate()
            .map(|(index, url)| {
                let class = if index == thumbnail {
                    "image-grid__item image-grid__item--thumbnail"
                } else {
                    "image-grid__item"
                };
                view! {
                    <div class=class>
                        <img src=url.clone() alt=format!("Product image {}", index + 1) />
                        <div class="image-grid__actions">
                            <button
                                class="button button--ghost button--small"
                                title="Use as thumbnail"
                                disabled={index == thumbnail}
                                on:click=move |_| {
                                    draft.update(|p| {
                                        p.set_thumbnail(index);
                                    })
                                }
                            >
                                {icon("image")}
                            </button>
                            <button
                                class="button button--ghost button--small"
                                title="Remove image"
                                on:click=move |_| draft.update(|p| p.remove_image(index))
                            >
                                {icon("x")}
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <DialogFrame title=title on_close=close modal_style="max-width: 720px;">
            <div class="image-grid">{gallery}</div>
            <div class="form__row">
                <FormInput label="Image URL" value=new_url placeholder="https://..." />
                <Button appearance=ButtonAppearance::Secondary on_click=add_image>
                    {icon("plus")}
                    " Add Image"
                </Button>
            </div>
            {form_error(error)}
            <DialogFooter confirm_label="Save Images" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

/// Ставка налога PPN для колонки цены с налогом
#[component]
pub fn TaxSettingsDialog(
    state: RwSignal<ProductListState>,
    settings: RwSignal<TaxSettings>,
) -> impl IntoView {
    let rate = RwSignal::new(settings.get_untracked().tax_rate.to_string());
    let error = RwSignal::new(None::<String>);

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        match form_utils::count("Tax Rate", &rate.get_untracked()) {
            Ok(tax_rate) if tax_rate <= 100 => {
                log::info!("tax rate updated: {}%", tax_rate);
                settings.set(TaxSettings { tax_rate });
                state.update(|s| s.close_dialog());
            }
            Ok(_) => error.set(Some("Tax Rate must be between 0 and 100".to_string())),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title="Tax Settings (PPN)" on_close=close>
            <FormInput label="Tax Rate (%)" value=rate input_type="number" />
            {form_error(error)}
            <DialogFooter confirm_label="Update Tax Rate" on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}
