//! Значения полей записей таблиц и правила их сравнения

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Значение одного поля записи, по которому можно сортировать
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Необязательное поле без значения (например, пустая дата акции)
    Empty,
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Категория значения. Сравнивать можно только значения одной категории.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Empty,
    Flag,
    Numeric,
    Text,
    Date,
    DateTime,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Flag => "flag",
            Self::Numeric => "number",
            Self::Text => "text",
            Self::Date => "date",
            Self::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// `None` превращается в `Empty`
    pub fn optional<T: Into<FieldValue>>(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Empty => ValueKind::Empty,
            Self::Flag(_) => ValueKind::Flag,
            Self::Integer(_) | Self::Number(_) => ValueKind::Numeric,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Трёхстороннее сравнение.
    ///
    /// `Empty` меньше любого заданного значения. Для значений разных
    /// категорий возвращает `None`.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        use FieldValue::*;

        match (self, other) {
            (Empty, Empty) => Some(Ordering::Equal),
            (Empty, _) => Some(Ordering::Less),
            (_, Empty) => Some(Ordering::Greater),
            (Flag(a), Flag(b)) => Some(a.cmp(b)),
            (Integer(a), Integer(b)) => Some(a.cmp(b)),
            (Number(a), Number(b)) => Some(a.total_cmp(b)),
            (Integer(a), Number(b)) => Some((*a as f64).total_cmp(b)),
            (Number(a), Integer(b)) => Some(a.total_cmp(&(*b as f64))),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            (DateTime(a), DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(
            FieldValue::text("A").compare(&FieldValue::text("B")),
            Some(Ordering::Less)
        );
        assert_eq!(
            FieldValue::Integer(10).compare(&FieldValue::Integer(2)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            FieldValue::Flag(false).compare(&FieldValue::Flag(true)),
            Some(Ordering::Less)
        );

        let early = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(
            FieldValue::Date(late).compare(&FieldValue::Date(early)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_integer_and_number_are_comparable() {
        assert_eq!(
            FieldValue::Integer(3).compare(&FieldValue::Number(2.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(FieldValue::Integer(3).kind(), FieldValue::Number(1.0).kind());
    }

    #[test]
    fn test_empty_sorts_first() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            FieldValue::Empty.compare(&FieldValue::Date(date)),
            Some(Ordering::Less)
        );
        assert_eq!(
            FieldValue::Empty.compare(&FieldValue::Empty),
            Some(Ordering::Equal)
        );
        assert_eq!(FieldValue::optional::<NaiveDate>(None), FieldValue::Empty);
    }

    #[test]
    fn test_mixed_kinds_are_not_comparable() {
        assert_eq!(
            FieldValue::Integer(1).compare(&FieldValue::text("1")),
            None
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let datetime = date.and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(
            FieldValue::Date(date).compare(&FieldValue::DateTime(datetime)),
            None
        );
    }
}
