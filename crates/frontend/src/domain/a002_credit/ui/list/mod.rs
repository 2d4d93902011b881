pub mod state;

use self::state::{
    create_state, level_options, utilization_bar_class, utilization_bar_width, CreditDialog,
    TABLE_KEY,
};
use super::dialogs::{CreditLimitDialog, CreditTermsDialog, GlobalSettingsDialog};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::{format_percent, format_rupiah, SortableHeaderCell};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use contracts::domain::a002_credit::CreditSettings;
use leptos::prelude::*;
use thaw::*;

/// Страница "Credit Management"
#[component]
pub fn CreditList() -> impl IntoView {
    let state = create_state();
    let settings = RwSignal::new(CreditSettings::default());
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: CreditDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let find = |id: i64| state.with_untracked(|s| s.find(&id.to_string()).cloned());
        let view = match dialog.get()? {
            CreditDialog::GlobalSettings => {
                view! { <GlobalSettingsDialog state=state settings=settings /> }.into_any()
            }
            CreditDialog::CreditLimit(id) => {
                let account = find(id)?;
                view! { <CreditLimitDialog state=state account=account /> }.into_any()
            }
            CreditDialog::PaymentTerms(id) => {
                let account = find(id)?;
                view! { <CreditTermsDialog state=state account=account /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a002_credit--list">
            <PageHeader
                title="Credit Management"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <span class="page__hint">
                    {move || {
                        let s = settings.get();
                        format!(
                            "Defaults: {} / {} days",
                            format_rupiah(s.default_credit_limit),
                            s.default_payment_terms
                        )
                    }}
                </span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(CreditDialog::GlobalSettings)
                >
                    {icon("credit")}
                    " Global Credit Settings"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search customers..." statuses=level_options() />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Customer" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Credit Limit" sort_field="credit_limit" current_sort=current_sort on_sort=on_sort min_width=140.0 align="right" />
                                <SortableHeaderCell label="Credit Utilization" sort_field="utilization_percent" current_sort=current_sort on_sort=on_sort min_width=220.0 />
                                <SortableHeaderCell label="Payment Terms" sort_field="payment_terms" current_sort=current_sort on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Overdue" sort_field="overdue_invoices" current_sort=current_sort on_sort=on_sort min_width=90.0 align="right" />
                                <TableHeaderCell resizable=false min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|account| {
                                let id = account.id;
                                let level = account.utilization_level();
                                let bar_class = utilization_bar_class(level);
                                let bar_style = utilization_bar_width(&account);
                                let percent = format_percent(account.utilization_percent());
                                let limit = format_rupiah(account.credit_limit);
                                let used = format_rupiah(account.credit_utilization);
                                let terms = format!("{} Days", account.payment_terms);
                                let overdue = account.overdue_invoices;
                                let name = account.name;
                                let email = account.email;
                                let avatar = account.avatar;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="avatar">{avatar}</span>
                                                <div class="cell-stack">
                                                    <strong>{name}</strong>
                                                    <span class="text-muted">{email}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            {limit}
                                        </TableCell>
                                        <TableCell>
                                            <div class="cell-stack">
                                                <strong>{used}</strong>
                                                <div class="progress">
                                                    <div class=bar_class style=bar_style></div>
                                                </div>
                                                <span class="text-muted">{percent}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{terms}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            {overdue}
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Manage Credit Limit" icon_name="credit" on_click=Callback::new(move |_: ()| open(CreditDialog::CreditLimit(id))) />
                                                <RowAction title="Edit Payment Terms" icon_name="settings" on_click=Callback::new(move |_: ()| open(CreditDialog::PaymentTerms(id))) />
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
