pub mod badge;
pub mod form;

pub use badge::{Badge, StatusBadge};
pub use form::{FormCheckbox, FormInput, FormSelect, FormTextarea};
