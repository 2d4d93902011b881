use super::list::state::{
    known_customers, payment_method_options, payment_status_options, status_options,
    OrderForm, OrderItemForm, OrderListState,
};
use crate::shared::components::dialog_frame::{form_error, ConfirmDialog, DialogFooter, DialogFrame};
use crate::shared::components::table::{format_rupiah, parse_rupiah};
use crate::shared::components::ui::{FormInput, FormSelect};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a003_order::Order;
use contracts::domain::a004_product::mock_products;
use leptos::prelude::*;
use thaw::*;

/// Поля одной строки заказа
#[derive(Clone, Copy)]
struct ItemFields {
    name: RwSignal<String>,
    quantity: RwSignal<String>,
    price: RwSignal<String>,
}

impl ItemFields {
    fn new(form: OrderItemForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            quantity: RwSignal::new(form.quantity),
            price: RwSignal::new(form.price),
        }
    }

    fn to_form(self) -> OrderItemForm {
        OrderItemForm {
            name: self.name.get_untracked(),
            quantity: self.quantity.get_untracked(),
            price: self.price.get_untracked(),
        }
    }

    /// Сумма строки для предпросмотра; некорректные значения дают 0
    fn preview_amount(&self) -> i64 {
        let quantity: i64 = self.quantity.get().trim().parse().unwrap_or(0);
        let price = parse_rupiah(&self.price.get()).unwrap_or(0);
        quantity * price
    }
}

fn product_names() -> Vec<String> {
    match mock_products() {
        Ok(products) => products.into_iter().map(|p| p.name).collect(),
        Err(e) => {
            log::error!("product list unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Добавление (`editing = None`) или редактирование заказа
#[component]
pub fn OrderFormDialog(
    state: RwSignal<OrderListState>,
    #[prop(optional)]
    editing: Option<Order>,
) -> impl IntoView {
    let now = Utc::now().naive_utc();
    let initial = editing
        .as_ref()
        .map(OrderForm::from_order)
        .unwrap_or_else(|| OrderForm::for_new(now));
    let title = match &editing {
        Some(order) => format!("Edit Order {}", order.id),
        None => "Create New Order".to_string(),
    };
    let confirm_label = if editing.is_some() { "Update Order" } else { "Create Order" };
    let editing = StoredValue::new(editing);

    let customer_name = RwSignal::new(initial.customer_name);
    let status = RwSignal::new(initial.status);
    let payment_status = RwSignal::new(initial.payment_status);
    let payment_method = RwSignal::new(initial.payment_method);
    let payment_due = RwSignal::new(initial.payment_due);
    let items = RwSignal::new(
        initial
            .items
            .into_iter()
            .map(ItemFields::new)
            .collect::<Vec<_>>(),
    );
    let error = RwSignal::new(None::<String>);

    let mut customers: Vec<(String, String)> = vec![(String::new(), "Select customer...".to_string())];
    customers.extend(
        state
            .with_untracked(|s| known_customers(&s.items))
            .into_iter()
            .map(|name| (name.clone(), name)),
    );
    let products = product_names();

    let add_item = move |_| items.update(|v| v.push(ItemFields::new(OrderItemForm::default())));
    let remove_item = move |index: usize| {
        items.update(|v| {
            if index < v.len() {
                v.remove(index);
            }
        })
    };
    let total_preview = move || {
        let total: i64 = items.with(|v| v.iter().map(ItemFields::preview_amount).sum());
        format_rupiah(total)
    };

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = OrderForm {
            customer_name: customer_name.get_untracked(),
            status: status.get_untracked(),
            payment_status: payment_status.get_untracked(),
            payment_method: payment_method.get_untracked(),
            payment_due: payment_due.get_untracked(),
            items: items.get_untracked().into_iter().map(ItemFields::to_form).collect(),
        };
        let result = editing.with_value(|editing| {
            state.with_untracked(|s| form.to_order(editing.as_ref(), now, &s.items))
        });
        match result {
            Ok(order) => {
                log::info!("order saved: {} total={}", order.id, order.total);
                state.update(|s| s.upsert(order));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <DialogFrame title=title on_close=close modal_style="max-width: 820px;">
            <div class="form__grid">
                <div>
                    <FormSelect label="Customer *" value=customer_name options=customers />
                    <FormSelect label="Payment Method *" value=payment_method options=payment_method_options() />
                    <FormInput label="Payment Due Date" value=payment_due input_type="date" />
                    <FormSelect label="Order Status" value=status options=status_options() />
                    <FormSelect label="Payment Status" value=payment_status options=payment_status_options() />
                </div>
                <div>
                    <label class="form__label">"Order Items *"</label>
                    {move || items.get().into_iter().enumerate().map(|(index, fields)| {
                        let options = products.clone();
                        view! {
                            <div class="order-item">
                                <select
                                    class="form__select"
                                    prop:value=move || fields.name.get()
                                    on:change=move |ev| fields.name.set(event_target_value(&ev))
                                >
                                    <option value="">"Select product..."</option>
                                    {options.into_iter().map(|name| {
                                        let name_for_selected = name.clone();
                                        let label = name.clone();
                                        view! {
                                            <option value=name selected=move || fields.name.get() == name_for_selected>
                                                {label}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                                <input
                                    class="form__input order-item__qty"
                                    type="number"
                                    min="1"
                                    placeholder="Qty"
                                    prop:value=move || fields.quantity.get()
                                    on:input=move |ev| fields.quantity.set(event_target_value(&ev))
                                />
                                <input
                                    class="form__input order-item__price"
                                    placeholder="Price"
                                    prop:value=move || fields.price.get()
                                    on:input=move |ev| fields.price.set(event_target_value(&ev))
                                />
                                <button
                                    class="button button--ghost"
                                    title="Remove item"
                                    on:click=move |_| remove_item(index)
                                >
                                    {icon("delete")}
                                </button>
                            </div>
                        }
                    }).collect_view()}
                    <Button appearance=ButtonAppearance::Secondary on_click=add_item>
                        {icon("plus")}
                        " Add Item"
                    </Button>
                    <div class="order-item__total">
                        "Total: "
                        <strong>{total_preview}</strong>
                    </div>
                </div>
            </div>
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn DeleteOrderDialog(state: RwSignal<OrderListState>, order: Order) -> impl IntoView {
    let key = order.id.clone();
    view! {
        <ConfirmDialog
            title="Delete Order"
            message=format!("Delete order {} for {}?", order.id, order.customer_name)
            confirm_label="Delete"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("order deleted: {}", key);
                state.update(|s| s.remove(&key));
            })
        />
    }
}
