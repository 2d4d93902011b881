pub mod state;

use self::state::{availability_options, create_state, promotion_period, ProductDialog, TABLE_KEY};
use super::dialogs::{DeleteProductDialog, ImageManagerDialog, ProductFormDialog, TaxSettingsDialog};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::{format_rupiah, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use contracts::domain::a004_product::TaxSettings;
use leptos::prelude::*;
use thaw::*;

/// Страница "Products"
#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let tax = RwSignal::new(TaxSettings::default());
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: ProductDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let find = |id: i64| state.with_untracked(|s| s.find(&id.to_string()).cloned());
        let view = match dialog.get()? {
            ProductDialog::Add => view! { <ProductFormDialog state=state /> }.into_any(),
            ProductDialog::Edit(id) => {
                let product = find(id)?;
                view! { <ProductFormDialog state=state editing=product /> }.into_any()
            }
            ProductDialog::Delete(id) => {
                let product = find(id)?;
                view! { <DeleteProductDialog state=state product=product /> }.into_any()
            }
            ProductDialog::ImageManager(id) => {
                let product = find(id)?;
                view! { <ImageManagerDialog state=state product=product /> }.into_any()
            }
            ProductDialog::TaxSettings => {
                view! { <TaxSettingsDialog state=state settings=tax /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a004_product--list">
            <PageHeader
                title="Products"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(ProductDialog::Add)
                >
                    {icon("plus")}
                    " Add New Product"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open(ProductDialog::TaxSettings)
                >
                    {move || format!("Tax Settings ({}%)", tax.get().tax_rate)}
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search products..." statuses=availability_options() />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Product Name" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=280.0 />
                                <SortableHeaderCell label="Price" sort_field="price" current_sort=current_sort on_sort=on_sort min_width=130.0 align="right" />
                                <TableHeaderCell resizable=false min_width=130.0>"Incl. Tax"</TableHeaderCell>
                                <SortableHeaderCell label="Availability" sort_field="is_available" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Promotional Period" sort_field="promotional_start" current_sort=current_sort on_sort=on_sort min_width=190.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|product| {
                                let id = product.id;
                                let availability = if product.is_available { "Available" } else { "Unavailable" };
                                let price = product.price;
                                let period = promotion_period(&product);
                                let thumbnail = product.thumbnail().map(str::to_string);
                                let is_foc = product.is_foc;
                                let name = product.name;
                                let alt = name.clone();
                                let description = product.description;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {thumbnail.map(|src| view! {
                                                    <img class="product-thumb" src=src alt=alt />
                                                })}
                                                <div class="cell-stack">
                                                    <strong>
                                                        {name}
                                                        {is_foc.then(|| view! { " " <Badge>"FoC"</Badge> })}
                                                    </strong>
                                                    <span class="text-muted">{description}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=price />
                                        <TableCell class="text-right">
                                            {move || format_rupiah(tax.get().price_with_tax(price))}
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=availability />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{period}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit Product" icon_name="edit" on_click=Callback::new(move |_: ()| open(ProductDialog::Edit(id))) />
                                                <RowAction title="Manage Images" icon_name="image" on_click=Callback::new(move |_: ()| open(ProductDialog::ImageManager(id))) />
                                                <RowAction title="Delete Product" icon_name="delete" on_click=Callback::new(move |_: ()| open(ProductDialog::Delete(id))) />
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
