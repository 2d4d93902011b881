pub mod state;

use self::state::{advance_batch, advance_label, create_state, status_tabs, DeliveryDialog, TABLE_KEY};
use super::dialogs::{AreaManagementDialog, DeliveryFormDialog};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use contracts::domain::a006_delivery::DeliveryAreas;
use leptos::prelude::*;
use thaw::*;

/// Страница "Delivery Management"
#[component]
pub fn DeliveryList() -> impl IntoView {
    let state = create_state();
    let areas = RwSignal::new(DeliveryAreas::default());
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: DeliveryDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let view = match dialog.get()? {
            DeliveryDialog::Add => {
                view! { <DeliveryFormDialog state=state areas=areas /> }.into_any()
            }
            DeliveryDialog::Edit(id) => {
                let batch = state.with_untracked(|s| s.find(&id.to_string()).cloned())?;
                view! { <DeliveryFormDialog state=state areas=areas editing=batch /> }.into_any()
            }
            DeliveryDialog::AreaManagement => {
                view! { <AreaManagementDialog state=state areas=areas /> }.into_any()
            }
        };
        Some(view)
    };

    let tabs = status_tabs()
        .into_iter()
        .map(|(filter, label)| {
            let filter_for_class = filter.clone();
            let class = move || {
                let active = state.with(|s| s.status_filter == filter_for_class);
                if active { "tabs__item tabs__item--active" } else { "tabs__item" }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        let filter = filter.clone();
                        state.update(|s| s.set_status_filter(filter));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a006_delivery--list">
            <PageHeader
                title="Delivery Management"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open(DeliveryDialog::AreaManagement)
                >
                    {icon("settings")}
                    " Manage Areas"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(DeliveryDialog::Add)
                >
                    {icon("plus")}
                    " Create Delivery Batch"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search batches, coordinators, areas..." />
                <nav class="tabs" aria-label="Tabs">{tabs}</nav>

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Batch" sort_field="batch_id" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Orders" sort_field="order_count" current_sort=current_sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Coordinator" sort_field="coordinator" current_sort=current_sort on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Area" sort_field="area" current_sort=current_sort on_sort=on_sort />
                                <SortableHeaderCell label="Planned Date" sort_field="planned_date" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort=current_sort on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=200.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|batch| {
                                let id = batch.id;
                                let key = id.to_string();
                                let order_count = format!("{} orders", batch.order_count());
                                let customers = batch.customer_names.join(", ");
                                let planned = batch.planned_date.format("%d.%m.%Y").to_string();
                                let status = batch.status.code();
                                let advance = advance_label(batch.status);
                                let batch_id = batch.batch_id;
                                let coordinator = batch.coordinator;
                                let area = batch.area;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout><strong>{batch_id}</strong></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="cell-stack">
                                                <span>{order_count}</span>
                                                <span class="text-muted">{customers}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{coordinator}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{area}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{planned}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit Delivery" icon_name="edit" on_click=Callback::new(move |_: ()| open(DeliveryDialog::Edit(id))) />
                                                {advance.map(|label| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        size=ButtonSize::Small
                                                        on_click=move |_| state.update(|s| advance_batch(s, &key))
                                                    >
                                                        {label}
                                                    </Button>
                                                })}
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
