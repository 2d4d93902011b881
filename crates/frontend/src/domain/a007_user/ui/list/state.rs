use crate::shared::form_utils::{self, FieldResult};
use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use contracts::domain::a007_user::{mock_users, AdminUser, UserRole};
use contracts::domain::common::next_id;
use contracts::enums::ActivityStatus;
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a007_user";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub enum UserDialog {
    Add,
    Edit(i64),
    Delete(i64),
    ResetPassword(i64),
}

pub type UserListState = ListState<AdminUser, UserDialog>;

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(ListState::load(mock_users(), TABLE_KEY, &table_defaults(TABLE_KEY)))
}

pub fn role_options() -> Vec<(String, String)> {
    UserRole::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.code().to_string()))
        .collect()
}

pub fn status_options() -> Vec<(String, String)> {
    ActivityStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.code().to_string()))
        .collect()
}

pub fn last_login_label(user: &AdminUser) -> String {
    user.last_login
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "Never".to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Пароль не хранится в записи; пустой при редактировании
    /// оставляет текущий
    pub password: String,
    pub role: String,
    pub status: String,
}

impl UserForm {
    pub fn for_new() -> Self {
        Self {
            role: UserRole::SalesAdmin.code().to_string(),
            status: ActivityStatus::Active.code().to_string(),
            ..Self::default()
        }
    }

    pub fn from_user(user: &AdminUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.code().to_string(),
            status: user.status.code().to_string(),
        }
    }

    /// При смене роли права сбрасываются на права новой роли
    pub fn to_user(&self, editing: Option<&AdminUser>, existing: &[AdminUser]) -> FieldResult<AdminUser> {
        let name = form_utils::required("Full Name", &self.name)?;
        let email = form_utils::email(&self.email)?;
        let role = UserRole::from_code(&self.role)
            .ok_or_else(|| format!("Unknown role: {}", self.role))?;
        let status = ActivityStatus::from_code(&self.status)
            .ok_or_else(|| format!("Unknown status: {}", self.status))?;

        let password_required = editing.is_none();
        if (password_required || !self.password.is_empty())
            && self.password.chars().count() < MIN_PASSWORD_LEN
        {
            return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
        }

        let own_id = editing.map(|u| u.id);
        if existing
            .iter()
            .any(|u| Some(u.id) != own_id && u.email.eq_ignore_ascii_case(&email))
        {
            return Err(format!("Email {} is already in use", email));
        }

        let user = match editing {
            Some(current) => {
                let mut user = current.clone();
                if user.role != role {
                    user.permissions = role.permissions().iter().map(|p| p.to_string()).collect();
                }
                user.name = name;
                user.email = email;
                user.role = role;
                user.status = status;
                user
            }
            None => {
                let id = next_id(existing.iter().map(|u| u.id));
                let mut user = AdminUser::new_for_insert(id, name, email, role);
                user.status = status;
                user
            }
        };
        Ok(user)
    }
}
