pub mod components;
pub mod form_utils;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod page_frame;
pub mod table_config;
