//! Общие функции для всех записей справочников

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Разбирает встроенный JSON с демонстрационными данными
pub fn load_mock<T: DeserializeOwned>(name: &str, json: &str) -> anyhow::Result<Vec<T>> {
    let items: Vec<T> = serde_json::from_str(json)
        .with_context(|| format!("Failed to parse mock data '{}'", name))?;
    log::debug!("Loaded {} mock records for '{}'", items.len(), name);
    Ok(items)
}

/// Следующий свободный числовой идентификатор
pub fn next_id(ids: impl IntoIterator<Item = i64>) -> i64 {
    ids.into_iter().max().unwrap_or(0) + 1
}

/// Инициалы для аватара: первые буквы первых двух слов
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Добавляет идентификатор в список или убирает, если он уже есть
pub fn toggle_id(ids: &mut Vec<i64>, id: i64) {
    if let Some(pos) = ids.iter().position(|x| *x == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(vec![1, 3, 2]), 4);
        assert_eq!(next_id(Vec::new()), 1);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Budi Santoso"), "BS");
        assert_eq!(initials("siti rahayu putri"), "SR");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_toggle_id() {
        let mut ids = vec![1, 2];
        toggle_id(&mut ids, 1);
        toggle_id(&mut ids, 5);
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_load_mock_reports_bad_json() {
        let result: anyhow::Result<Vec<i64>> = load_mock("broken", "[1, 2,");
        assert!(result.is_err());
    }
}
