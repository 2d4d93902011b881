pub mod state;

use self::state::{create_state, CustomerDialog, TABLE_KEY};
use super::dialogs::{
    CreditLimitDialog, CustomerFormDialog, DeleteCustomerDialog, NotesDialog,
    PaymentTermsDialog, ResetPasswordDialog,
};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use contracts::enums::ActivityStatus;
use leptos::prelude::*;
use thaw::*;

/// Страница "Customer Management"
#[component]
pub fn CustomerList() -> impl IntoView {
    let state = create_state();
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);

    let open = move |d: CustomerDialog| state.update(|s| s.open_dialog(d));
    let statuses: Vec<(String, String)> = ActivityStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect();

    let render_dialog = move || {
        let current = dialog.get()?;
        let find = |id: i64| state.with_untracked(|s| s.find(&id.to_string()).cloned());
        let view = match current {
            CustomerDialog::Add => view! { <CustomerFormDialog state=state /> }.into_any(),
            CustomerDialog::Edit(id) => {
                let customer = find(id)?;
                view! { <CustomerFormDialog state=state editing=customer /> }.into_any()
            }
            CustomerDialog::Delete(id) => {
                let customer = find(id)?;
                view! { <DeleteCustomerDialog state=state customer=customer /> }.into_any()
            }
            CustomerDialog::ResetPassword(id) => {
                let customer = find(id)?;
                view! { <ResetPasswordDialog state=state customer=customer /> }.into_any()
            }
            CustomerDialog::CreditLimit(id) => {
                let customer = find(id)?;
                view! { <CreditLimitDialog state=state customer=customer /> }.into_any()
            }
            CustomerDialog::PaymentTerms(id) => {
                let customer = find(id)?;
                view! { <PaymentTermsDialog state=state customer=customer /> }.into_any()
            }
            CustomerDialog::Notes(id) => {
                let customer = find(id)?;
                view! { <NotesDialog state=state customer=customer /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a001_customer--list">
            <PageHeader
                title="Customer Management"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(CustomerDialog::Add)
                >
                    {icon("plus")}
                    " Add Customer"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search customers..." statuses=statuses />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Customer" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Email" sort_field="email" current_sort=current_sort on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="Credit Limit" sort_field="credit_limit" current_sort=current_sort on_sort=on_sort min_width=140.0 align="right" />
                                <SortableHeaderCell label="Payment Terms" sort_field="payment_terms" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort=current_sort on_sort=on_sort />
                                <SortableHeaderCell label="Promo Notes" sort_field="promo_notes" current_sort=current_sort on_sort=on_sort min_width=180.0 />
                                <TableHeaderCell resizable=false min_width=220.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|customer| {
                                let id = customer.id;
                                let notes = if customer.promo_notes.is_empty() {
                                    "-".to_string()
                                } else {
                                    customer.promo_notes.clone()
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="avatar">{customer.avatar.clone()}</span>
                                                " "
                                                {customer.name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{customer.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=customer.credit_limit />
                                        <TableCell>
                                            <TableCellLayout>{format!("{} Days", customer.payment_terms)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=customer.status.code() />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{notes}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit" icon_name="edit" on_click=Callback::new(move |_: ()| open(CustomerDialog::Edit(id))) />
                                                <RowAction title="Delete" icon_name="delete" on_click=Callback::new(move |_: ()| open(CustomerDialog::Delete(id))) />
                                                <RowAction title="Reset Password" icon_name="key" on_click=Callback::new(move |_: ()| open(CustomerDialog::ResetPassword(id))) />
                                                <RowAction title="Credit Limit" icon_name="credit" on_click=Callback::new(move |_: ()| open(CustomerDialog::CreditLimit(id))) />
                                                <RowAction title="Payment Terms" icon_name="settings" on_click=Callback::new(move |_: ()| open(CustomerDialog::PaymentTerms(id))) />
                                                <RowAction title="Promo Notes" icon_name="note" on_click=Callback::new(move |_: ()| open(CustomerDialog::Notes(id))) />
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
