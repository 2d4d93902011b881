pub mod dialog_frame;
pub mod list_controls;
pub mod pagination_controls;
pub mod table;
pub mod ui;
