pub mod state;

use self::state::{create_state, status_options, OrderDialog, TABLE_KEY};
use super::dialogs::{DeleteOrderDialog, OrderFormDialog};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use leptos::prelude::*;
use thaw::*;

/// Страница "Order Management"
#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: OrderDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let find = |id: &str| state.with_untracked(|s| s.find(id).cloned());
        let view = match dialog.get()? {
            OrderDialog::Add => view! { <OrderFormDialog state=state /> }.into_any(),
            OrderDialog::Edit(id) => {
                let order = find(&id)?;
                view! { <OrderFormDialog state=state editing=order /> }.into_any()
            }
            OrderDialog::Delete(id) => {
                let order = find(&id)?;
                view! { <DeleteOrderDialog state=state order=order /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a003_order--list">
            <PageHeader
                title="Order Management"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(OrderDialog::Add)
                >
                    {icon("plus")}
                    " Create Order"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search orders..." statuses=status_options() />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Order" sort_field="id" current_sort=current_sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Date" sort_field="order_date" current_sort=current_sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Customer" sort_field="customer_name" current_sort=current_sort on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort=current_sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Payment" sort_field="payment_status" current_sort=current_sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Total" sort_field="total" current_sort=current_sort on_sort=on_sort min_width=130.0 align="right" />
                                <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|order| {
                                let edit_id = order.id.clone();
                                let delete_id = order.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{order.id.clone()}</strong>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{order.order_date.format("%d.%m.%Y").to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{order.customer_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=order.status.code() />
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=order.payment_status.code() />
                                        </TableCell>
                                        <TableCellMoney value=order.total bold=true />
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit Order" icon_name="edit" on_click=Callback::new(move |_: ()| open(OrderDialog::Edit(edit_id.clone()))) />
                                                <RowAction title="Delete Order" icon_name="delete" on_click=Callback::new(move |_: ()| open(OrderDialog::Delete(delete_id.clone()))) />
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>

                <ListPagination state=state />
            </div>

            {render_dialog}
        </PageFrame>
    }
}
