pub mod aggregate;

pub use aggregate::{mock_users, AdminUser, UserRole};
