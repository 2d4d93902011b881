use serde::{Deserialize, Serialize};

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Активная сортировка: ровно одно поле и направление
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }
}

/// Переключение сортировки по клику на заголовок колонки.
///
/// Повторный клик по тому же полю меняет направление, клик по другому
/// полю начинает сортировку по нему по возрастанию.
pub fn toggle_sort(current: &SortSpec, field: &str) -> SortSpec {
    if current.field == field {
        SortSpec::new(field, current.direction.flipped())
    } else {
        SortSpec::asc(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let current = SortSpec::asc("name");
        assert_eq!(toggle_sort(&current, "name"), SortSpec::desc("name"));
    }

    #[test]
    fn test_toggle_other_field_starts_ascending() {
        let current = SortSpec::desc("name");
        assert_eq!(toggle_sort(&current, "email"), SortSpec::asc("email"));
    }

    #[test]
    fn test_toggle_twice_restores_direction() {
        for start in [SortSpec::asc("total"), SortSpec::desc("total")] {
            let once = toggle_sort(&start, "total");
            let twice = toggle_sort(&once, "total");
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn test_direction_serde_lowercase() {
        let json = serde_json::to_string(&SortDirection::Desc).unwrap();
        assert_eq!(json, "\"desc\"");
    }
}
