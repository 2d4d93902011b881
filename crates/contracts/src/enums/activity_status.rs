use serde::{Deserialize, Serialize};

/// Статус активности клиента или пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivityStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActivityStatus::Active)
    }

    /// Получить все статусы
    pub fn all() -> Vec<ActivityStatus> {
        vec![ActivityStatus::Active, ActivityStatus::Inactive]
    }

    /// Парсинг из строки (без учёта регистра)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ActivityStatus::from_code("inactive"), Some(ActivityStatus::Inactive));
        assert_eq!(ActivityStatus::from_code("Active"), Some(ActivityStatus::Active));
        assert_eq!(ActivityStatus::from_code("blocked"), None);
    }
}
