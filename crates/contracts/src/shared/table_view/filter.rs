use super::record::TableRecord;

/// Минимальная длина поискового запроса; более короткие запросы игнорируются
pub const MIN_SEARCH_LEN: usize = 3;

/// Фильтр списка: поисковая строка и выбранный статус
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub query: String,
    pub status: Option<String>,
}

impl RecordFilter {
    pub fn new(query: impl Into<String>, status: Option<String>) -> Self {
        Self {
            query: query.into(),
            status,
        }
    }

    /// Поисковый запрос в нижнем регистре, если он достаточно длинный
    fn effective_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.chars().count() < MIN_SEARCH_LEN {
            return None;
        }
        Some(trimmed.to_lowercase())
    }

    pub fn is_active(&self) -> bool {
        self.effective_query().is_some() || self.status.is_some()
    }

    pub fn matches<R: TableRecord>(&self, record: &R) -> bool {
        self.matches_query(record, self.effective_query().as_deref())
    }

    fn matches_query<R: TableRecord>(&self, record: &R, query: Option<&str>) -> bool {
        if let Some(q) = query {
            if !record.search_text().to_lowercase().contains(q) {
                return false;
            }
        }

        match &self.status {
            Some(status) => record
                .status_key()
                .map(|key| key.eq_ignore_ascii_case(status))
                .unwrap_or(false),
            None => true,
        }
    }
}

/// Фильтрует записи, сохраняя исходный порядок
pub fn filter_records<'a, R: TableRecord>(records: &'a [R], filter: &RecordFilter) -> Vec<&'a R> {
    let query = filter.effective_query();
    records
        .iter()
        .filter(|record| filter.matches_query(*record, query.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table_view::value::FieldValue;

    struct Row {
        id: i64,
        name: &'static str,
        status: &'static str,
    }

    impl TableRecord for Row {
        fn record_key(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                _ => None,
            }
        }

        fn search_text(&self) -> String {
            self.name.to_string()
        }

        fn status_key(&self) -> Option<String> {
            Some(self.status.to_string())
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Budi Santoso", status: "Active" },
            Row { id: 2, name: "Siti Rahayu", status: "Active" },
            Row { id: 3, name: "Ahmad Wijaya", status: "Inactive" },
            Row { id: 4, name: "Santi Budiman", status: "Inactive" },
        ]
    }

    fn ids(found: &[&Row]) -> Vec<i64> {
        found.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_short_query_is_ignored() {
        let data = rows();
        let filter = RecordFilter::new("bu", None);
        assert!(!filter.is_active());
        assert_eq!(ids(&filter_records(&data, &filter)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_keeps_order() {
        let data = rows();
        let filter = RecordFilter::new("  BUDI ", None);
        assert_eq!(ids(&filter_records(&data, &filter)), vec![1, 4]);
    }

    #[test]
    fn test_status_filter() {
        let data = rows();
        let filter = RecordFilter::new("", Some("inactive".to_string()));
        assert!(filter.is_active());
        assert_eq!(ids(&filter_records(&data, &filter)), vec![3, 4]);
    }

    #[test]
    fn test_query_and_status_combined() {
        let data = rows();
        let filter = RecordFilter::new("santo", Some("Active".to_string()));
        assert_eq!(ids(&filter_records(&data, &filter)), vec![1]);
        assert!(filter.matches(&data[0]));
        assert!(!filter.matches(&data[3]));
    }
}
