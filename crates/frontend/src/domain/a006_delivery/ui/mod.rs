pub mod dialogs;
pub mod list;
