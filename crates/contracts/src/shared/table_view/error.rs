use thiserror::Error;

use super::value::ValueKind;

/// Ошибки построения представления таблицы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Field '{field}' is missing on record '{record_key}'")]
    MissingField { field: String, record_key: String },

    #[error("Field '{field}' mixes incomparable values: {left} and {right}")]
    IncomparableValues {
        field: String,
        left: ValueKind,
        right: ValueKind,
    },

    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),
}
