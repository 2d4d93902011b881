use super::list::state::{orders_by_customer, DeliveryForm, DeliveryListState};
use crate::shared::components::dialog_frame::{form_error, DialogFooter, DialogFrame};
use crate::shared::components::table::format_rupiah;
use crate::shared::components::ui::{FormInput, FormSelect};
use crate::shared::icons::icon;
use contracts::domain::a003_order::{mock_orders, Order};
use contracts::domain::a006_delivery::{DeliveryAreas, DeliveryBatch, DeliveryStatus, COORDINATORS};
use leptos::prelude::*;
use thaw::*;

fn order_catalog() -> Vec<Order> {
    mock_orders().unwrap_or_else(|e| {
        log::error!("order list unavailable: {}", e);
        Vec::new()
    })
}

fn to_options<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    values
        .into_iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Создание (`editing = None`) или редактирование партии доставки
#[component]
pub fn DeliveryFormDialog(
    state: RwSignal<DeliveryListState>,
    areas: RwSignal<DeliveryAreas>,
    #[prop(optional)]
    editing: Option<DeliveryBatch>,
) -> impl IntoView {
    let initial = match &editing {
        Some(batch) => DeliveryForm::from_batch(batch),
        None => areas.with_untracked(|a| {
            DeliveryForm::for_new(a.as_slice().first().map(String::as_str))
        }),
    };
    let (title, confirm_label) = match &editing {
        Some(batch) => (format!("Edit Delivery {}", batch.batch_id), "Update Batch"),
        None => ("Create Delivery Batch".to_string(), "Create Batch"),
    };
    let editing = StoredValue::new(editing);
    let catalog = StoredValue::new(order_catalog());

    let selected_orders = RwSignal::new(initial.orders);
    let planned_date = RwSignal::new(initial.planned_date);
    let area = RwSignal::new(initial.area);
    let coordinator = RwSignal::new(initial.coordinator);
    let status = RwSignal::new(initial.status);
    let error = RwSignal::new(None::<String>);

    let area_options = areas.with_untracked(|a| to_options(a.as_slice().iter().map(String::as_str)));
    let coordinator_options = to_options(COORDINATORS.iter().copied());
    let status_options = to_options(DeliveryStatus::all().iter().map(|s| s.code()));

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = DeliveryForm {
            orders: selected_orders.get_untracked(),
            planned_date: planned_date.get_untracked(),
            area: area.get_untracked(),
            coordinator: coordinator.get_untracked(),
            status: status.get_untracked(),
        };
        let result = editing.with_value(|editing| {
            catalog.with_value(|catalog| {
                state.with_untracked(|s| form.to_batch(editing.as_ref(), &s.items, catalog))
            })
        });
        match result {
            Ok(batch) => {
                log::info!("delivery batch saved: {} ({} orders)", batch.batch_id, batch.order_count());
                state.update(|s| s.upsert(batch));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let order_picker = catalog.with_value(|catalog| {
        orders_by_customer(catalog)
            .into_iter()
            .map(|(customer, orders)| {
                view! {
                    <div class="order-group">
                        <h4 class="order-group__title">{customer}</h4>
                        {orders.into_iter().map(|order| {
                            let order_id = order.id.clone();
                            let checked_id = order.id.clone();
                            view! {
                                <label class="form__checkbox-label order-group__item">
                                    <input
                                        type="checkbox"
                                        class="form__checkbox"
                                        prop:checked=move || selected_orders.with(|ids| ids.contains(&checked_id))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            let id = order_id.clone();
                                            selected_orders.update(|ids| {
                                                ids.retain(|x| *x != id);
                                                if checked {
                                                    ids.push(id);
                                                }
                                            });
                                        }
                                    />
                                    <span>
                                        {format!("{} • {} items", order.id, order.items.len())}
                                        <br />
                                        <span class="text-muted">{format!("Total: {}", format_rupiah(order.total))}</span>
                                    </span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <DialogFrame title=title on_close=close modal_style="max-width: 860px;">
            <div class="form__grid">
                <div>
                    <label class="form__label">"Select Orders"</label>
                    <div class="order-picker">{order_picker}</div>
                </div>
                <div>
                    <FormInput label="Planned Date" value=planned_date input_type="date" />
                    <FormSelect label="Area" value=area options=area_options />
                    <FormSelect label="Assign Logistic Coordinator" value=coordinator options=coordinator_options />
                    <FormSelect label="Status" value=status options=status_options />
                </div>
            </div>
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

/// Список районов доставки; изменения применяются сразу
#[component]
pub fn AreaManagementDialog(
    state: RwSignal<DeliveryListState>,
    areas: RwSignal<DeliveryAreas>,
) -> impl IntoView {
    let new_area = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));

    let add_area = move |_| {
        let name = new_area.get_untracked();
        let mut added = false;
        areas.update(|a| added = a.add(&name));
        if added {
            log::info!("delivery area added: {}", name.trim());
            new_area.set(String::new());
            error.set(None);
        } else {
            error.set(Some(format!("'{}' is empty or already in the list", name.trim())));
        }
    };

    view! {
        <DialogFrame title="Manage Delivery Areas" on_close=close>
            <div class="form__row">
                <FormInput label="New Area" value=new_area placeholder="Add new area..." />
                <Button appearance=ButtonAppearance::Primary on_click=add_area>
                    {icon("plus")}
                    " Add"
                </Button>
            </div>
            {form_error(error)}
            <ul class="area-list">
                {move || areas.get().as_slice().iter().enumerate().map(|(index, name)| {
                    view! {
                        <li class="area-list__item">
                            <span>{name.clone()}</span>
                            <button
                                class="button button--ghost button--small"
                                title="Remove area"
                                on:click=move |_| {
                                    areas.update(|a| {
                                        if let Some(removed) = a.remove(index) {
                                            log::info!("delivery area removed: {}", removed);
                                        }
                                    })
                                }
                            >
                                {icon("delete")}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                    "Done"
                </Button>
            </div>
        </DialogFrame>
    }
}
