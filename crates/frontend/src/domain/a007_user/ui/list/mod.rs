pub mod state;

use self::state::{create_state, last_login_label, status_options, UserDialog, TABLE_KEY};
use super::dialogs::{DeleteUserDialog, UserFormDialog, UserResetPasswordDialog};
use crate::shared::components::list_controls::{
    dialog_memo, sort_bindings, visible_rows, ListFilters, ListPagination, RowAction,
};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use contracts::domain::common::initials;
use leptos::prelude::*;
use thaw::*;

/// Страница "User Management"
#[component]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let (current_sort, on_sort) = sort_bindings(state);
    let dialog = dialog_memo(state);
    let open = move |d: UserDialog| state.update(|s| s.open_dialog(d));

    let render_dialog = move || {
        let find = |id: i64| state.with_untracked(|s| s.find(&id.to_string()).cloned());
        let view = match dialog.get()? {
            UserDialog::Add => view! { <UserFormDialog state=state /> }.into_any(),
            UserDialog::Edit(id) => {
                let user = find(id)?;
                view! { <UserFormDialog state=state editing=user /> }.into_any()
            }
            UserDialog::Delete(id) => {
                let user = find(id)?;
                view! { <DeleteUserDialog state=state user=user /> }.into_any()
            }
            UserDialog::ResetPassword(id) => {
                let user = find(id)?;
                view! { <UserResetPasswordDialog state=state user=user /> }.into_any()
            }
        };
        Some(view)
    };

    view! {
        <PageFrame page_id="a007_user--list">
            <PageHeader
                title="User Management"
                total=Signal::derive(move || state.with(|s| s.view.total_records))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open(UserDialog::Add)
                >
                    {icon("plus")}
                    " Add User"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListFilters state=state placeholder="Search users..." statuses=status_options() />

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", TABLE_KEY) attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="User" sort_field="name" current_sort=current_sort on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Role" sort_field="role" current_sort=current_sort on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort=current_sort on_sort=on_sort />
                                <SortableHeaderCell label="Last Login" sort_field="last_login" current_sort=current_sort on_sort=on_sort min_width=150.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || visible_rows(state).into_iter().map(|user| {
                                let id = user.id;
                                let avatar = initials(&user.name);
                                let last_login = last_login_label(&user);
                                let role_code = user.role.code();
                                let role_description = user.role.description();
                                let status = user.status.code();
                                let name = user.name;
                                let email = user.email;
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
                                        <TableCell>
                                            <span title=role_description>
                                                <Badge variant="primary">{role_code}</Badge>
                                            </span>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=status />
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{last_login}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <RowAction title="Edit User" icon_name="edit" on_click=Callback::new(move |_: ()| open(UserDialog::Edit(id))) />
                                                <RowAction title="Reset Password" icon_name="key" on_click=Callback::new(move |_: ()| open(UserDialog::ResetPassword(id))) />
                                                <RowAction title="Delete User" icon_name="delete" on_click=Callback::new(move |_: ()| open(UserDialog::Delete(id))) />
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
