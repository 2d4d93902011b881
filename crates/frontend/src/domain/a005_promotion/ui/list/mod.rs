pub mod state;

use self::state::{create_state, discount_label, status_label, status_options, PromotionDialog, TABLE_KEY};
use super::dialogs::PromotionFormDialog;
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use leptos::prelude::*;
use thaw::*;

/// Страница "Promotions"
#[component]
pub fn PromotionList() -> impl IntoView {
    let state = create_state();
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: PromotionDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let view = match dialog.get()? {
            PromotionDialog::Add => view! { <PromotionFormDialog state=state /> }.into_any(),
            PromotionDialog::Edit(id) => {
                let promotion = state.with_untracked(|s| s.find(&id.to_string()).cloned())?;
                view! { <PromotionFormDialog state=state editing=promotion /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a005_promotion--list">
            <PageHeader
                title="Promotions"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(PromotionDialog::Add)
                >
                    {icon("plus")}
                    " Create Promotion"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search promotions..." statuses=status_options() />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Promotion" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Start" sort_field="start_date" current_sort=current_sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="End" sort_field="end_date" current_sort=current_sort on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Discount" sort_field="discount_value" current_sort=current_sort on_sort=on_sort min_width=120.0 align="right" />
                                <TableHeaderCell resizable=false min_width=90.0>"Products"</TableHeaderCell>
                                <SortableHeaderCell label="Status" sort_field="status" current_sort=current_sort on_sort=on_sort />
                                <TableHeaderCell resizable=false min_width=80.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|promotion| {
                                let id = promotion.id;
                                let start = promotion.start_date.format("%d.%m.%Y").to_string();
                                let end = promotion.end_date.format("%d.%m.%Y").to_string();
                                let discount = discount_label(&promotion);
                                let product_count = promotion.products.len();
                                let status = status_label(promotion.status);
                                let name = promotion.name;
                                let description = promotion.description;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="cell-stack">
                                                    <strong>{name}</strong>
                                                    <span class="text-muted">{description}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{start}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{end}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">{discount}</TableCell>
                                        <TableCell class="text-right">{product_count}</TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit Promotion" icon_name="edit" on_click=Callback::new(move |_: ()| open(PromotionDialog::Edit(id))) />
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
