pub mod config;
pub mod dialog_state;
pub mod table_view;
