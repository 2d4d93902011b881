use super::list::state::{role_options, status_options, UserForm, UserListState};
use crate::shared::components::dialog_frame::{form_error, ConfirmDialog, DialogFooter, DialogFrame};
use crate::shared::components::ui::{FormInput, FormSelect};
use contracts::domain::a007_user::{AdminUser, UserRole};
use leptos::prelude::*;

/// Добавление (`editing = None`) или редактирование пользователя
#[component]
pub fn UserFormDialog(
    state: RwSignal<UserListState>,
    #[prop(optional)]
    editing: Option<AdminUser>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(UserForm::from_user)
        .unwrap_or_else(UserForm::for_new);
    let is_edit = editing.is_some();
    let (title, confirm_label) = if is_edit {
        ("Edit User", "Update User")
    } else {
        ("Add New User", "Add User")
    };
    let editing = StoredValue::new(editing);

    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let password = RwSignal::new(initial.password);
    let role = RwSignal::new(initial.role);
    let status = RwSignal::new(initial.status);
    let error = RwSignal::new(None::<String>);

    let role_description = move || {
        UserRole::from_code(&role.get())
            .map(|r| r.description())
            .unwrap_or_default()
    };

    let close = Callback::new(move |_: ()| state.update(|s| s.close_dialog()));
    let save = Callback::new(move |_: ()| {
        let form = UserForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
            status: status.get_untracked(),
        };
        let result = editing.with_value(|editing| {
            state.with_untracked(|s| form.to_user(editing.as_ref(), &s.items))
        });
        match result {
            Ok(user) => {
                if !form.password.is_empty() {
                    log::info!("password set for user id={}", user.id);
                }
                log::info!("user saved: id={} role={}", user.id, user.role.code());
                state.update(|s| s.upsert(user));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let password_placeholder = if is_edit {
        "Leave blank to keep current"
    } else {
        "Enter password"
    };

    view! {
        <DialogFrame title=title on_close=close>
            <FormInput label="Full Name" value=name required=true />
            <FormInput label="Email Address" value=email input_type="email" required=true />
            <FormInput label="Password" value=password input_type="password" placeholder=password_placeholder />
            <FormSelect label="User Role" value=role options=role_options() />
            <p class="form__hint">{role_description}</p>
            <FormSelect label="Status" value=status options=status_options() />
            {form_error(error)}
            <DialogFooter confirm_label=confirm_label on_cancel=close on_confirm=save />
        </DialogFrame>
    }
}

#[component]
pub fn DeleteUserDialog(state: RwSignal<UserListState>, user: AdminUser) -> impl IntoView {
    let key = user.id.to_string();
    view! {
        <ConfirmDialog
            title="Delete User"
            message=format!("Remove {} ({}) from the admin panel?", user.name, user.email)
            confirm_label="Delete"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("user deleted: id={}", key);
                state.update(|s| s.remove(&key));
            })
        />
    }
}

#[component]
pub fn UserResetPasswordDialog(state: RwSignal<UserListState>, user: AdminUser) -> impl IntoView {
    let email = user.email.clone();
    view! {
        <ConfirmDialog
            title="Reset Password"
            message=format!("Send password reset email to {}?", user.email)
            confirm_label="Send Reset Email"
            on_cancel=Callback::new(move |_: ()| state.update(|s| s.close_dialog()))
            on_confirm=Callback::new(move |_: ()| {
                log::info!("password reset requested for {}", email);
                state.update(|s| s.close_dialog());
            })
        />
    }
}
