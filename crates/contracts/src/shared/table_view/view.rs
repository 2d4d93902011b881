use std::cmp::Ordering;

use super::error::ViewError;
use super::filter::{filter_records, RecordFilter};
use super::page::{total_pages, PageSpec};
use super::record::TableRecord;
use super::sort::{SortDirection, SortSpec};
use super::value::{FieldValue, ValueKind};

/// Видимая страница таблицы и данные для элементов пагинации
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResult<R> {
    pub visible_records: Vec<R>,
    pub total_records: usize,
    pub total_pages: usize,
    /// Фактически показанная страница (после приведения к диапазону)
    pub page_index: usize,
    /// Границы "показано с X по Y из Z", с 1 включительно; 0 для пустого набора
    pub range_start: usize,
    pub range_end: usize,
}

impl<R> ViewResult<R> {
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Сортирует копию записей и вырезает запрошенную страницу.
///
/// Исходный срез не меняется. Сортировка устойчивая: записи с равными
/// ключами сохраняют исходный порядок при любом направлении.
pub fn compute_view<R: TableRecord + Clone>(
    records: &[R],
    sort: &SortSpec,
    page: &PageSpec,
) -> Result<ViewResult<R>, ViewError> {
    build_view(records.iter().collect(), sort, page)
}

/// То же, что [`compute_view`], но сначала применяет поиск и фильтр статуса
pub fn compute_view_filtered<R: TableRecord + Clone>(
    records: &[R],
    filter: &RecordFilter,
    sort: &SortSpec,
    page: &PageSpec,
) -> Result<ViewResult<R>, ViewError> {
    build_view(filter_records(records, filter), sort, page)
}

fn build_view<R: TableRecord + Clone>(
    rows: Vec<&R>,
    sort: &SortSpec,
    page: &PageSpec,
) -> Result<ViewResult<R>, ViewError> {
    let pages = total_pages(rows.len(), page.page_size)?;
    let keys = extract_sort_keys(&rows, &sort.field)?;

    let mut order: Vec<usize> = (0..rows.len()).collect();
    // sort_by устойчива, ключи уже проверены на сравнимость
    order.sort_by(|&a, &b| {
        let cmp = keys[a].compare(&keys[b]).unwrap_or(Ordering::Equal);
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });

    let total_records = rows.len();
    let page_index = page.page_index.clamp(1, pages);
    if page_index != page.page_index {
        log::debug!(
            "page {} clamped to {} ({} records, {} pages)",
            page.page_index,
            page_index,
            total_records,
            pages
        );
    }

    let start = (page_index - 1) * page.page_size;
    let end = (start + page.page_size).min(total_records);
    let visible_records = order[start..end]
        .iter()
        .map(|&i| rows[i].clone())
        .collect();

    let (range_start, range_end) = if total_records == 0 {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Ok(ViewResult {
        visible_records,
        total_records,
        total_pages: pages,
        page_index,
        range_start,
        range_end,
    })
}

/// Извлекает ключи сортировки и проверяет, что все они одной категории
fn extract_sort_keys<R: TableRecord>(rows: &[&R], field: &str) -> Result<Vec<FieldValue>, ViewError> {
    let mut keys = Vec::with_capacity(rows.len());
    let mut seen_kind: Option<ValueKind> = None;

    for row in rows {
        let value = row.field_value(field).ok_or_else(|| ViewError::MissingField {
            field: field.to_string(),
            record_key: row.record_key(),
        })?;

        let kind = value.kind();
        if kind != ValueKind::Empty {
            match seen_kind {
                None => seen_kind = Some(kind),
                Some(expected) if expected != kind => {
                    return Err(ViewError::IncomparableValues {
                        field: field.to_string(),
                        left: expected,
                        right: kind,
                    });
                }
                Some(_) => {}
            }
        }

        keys.push(value);
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        name: String,
        score: FieldValue,
    }

    impl Row {
        fn new(id: i64, name: &str) -> Self {
            Self {
                id,
                name: name.to_string(),
                score: FieldValue::Integer(id),
            }
        }
    }

    impl TableRecord for Row {
        fn record_key(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.clone().into()),
                "score" => Some(self.score.clone()),
                _ => None,
            }
        }

        fn search_text(&self) -> String {
            self.name.clone()
        }
    }

    fn ids<R: Clone>(view: &ViewResult<R>, id: impl Fn(&R) -> i64) -> Vec<i64> {
        view.visible_records.iter().map(id).collect()
    }

    fn numbered(count: i64) -> Vec<Row> {
        (1..=count).map(|i| Row::new(i, &format!("Row {:02}", i))).collect()
    }

    #[test]
    fn test_stable_tie_on_first_page() {
        let records = vec![Row::new(1, "B"), Row::new(2, "A"), Row::new(3, "A")];
        let view = compute_view(&records, &SortSpec::asc("name"), &PageSpec::new(1, 2)).unwrap();

        assert_eq!(ids(&view, |r| r.id), vec![2, 3]);
        assert_eq!(view.range_start, 1);
        assert_eq!(view.range_end, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.total_records, 3);
    }

    #[test]
    fn test_stable_tie_descending() {
        let records = vec![Row::new(1, "A"), Row::new(2, "B"), Row::new(3, "A"), Row::new(4, "B")];
        let view = compute_view(&records, &SortSpec::desc("name"), &PageSpec::new(1, 10)).unwrap();
        assert_eq!(ids(&view, |r| r.id), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_empty_records_clamp_to_first_page() {
        let records: Vec<Row> = Vec::new();
        let view = compute_view(&records, &SortSpec::asc("name"), &PageSpec::new(5, 10)).unwrap();

        assert!(view.visible_records.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page_index, 1);
        assert_eq!(view.range_start, 0);
        assert_eq!(view.range_end, 0);
    }

    #[test]
    fn test_last_partial_page() {
        let records = numbered(25);
        let view = compute_view(&records, &SortSpec::asc("id"), &PageSpec::new(3, 10)).unwrap();

        assert_eq!(view.visible_records.len(), 5);
        assert_eq!(view.range_start, 21);
        assert_eq!(view.range_end, 25);
        assert_eq!(ids(&view, |r| r.id), vec![21, 22, 23, 24, 25]);
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_page_beyond_last_is_clamped() {
        let records = numbered(25);
        let view = compute_view(&records, &SortSpec::asc("id"), &PageSpec::new(9, 10)).unwrap();
        assert_eq!(view.page_index, 3);
        assert_eq!(view.range_start, 21);

        let view = compute_view(&records, &SortSpec::asc("id"), &PageSpec::new(0, 10)).unwrap();
        assert_eq!(view.page_index, 1);
        assert_eq!(view.range_start, 1);
    }

    #[test]
    fn test_range_matches_visible_len() {
        let records = numbered(42);
        for page_size in [1, 7, 10, 42, 100] {
            for page_index in 1..=8 {
                let view = compute_view(
                    &records,
                    &SortSpec::desc("id"),
                    &PageSpec::new(page_index, page_size),
                )
                .unwrap();
                assert!(view.visible_records.len() <= page_size);
                assert_eq!(view.range_end - view.range_start + 1, view.visible_records.len());
            }
        }
    }

    #[test]
    fn test_idempotent_and_source_untouched() {
        let records = vec![Row::new(3, "C"), Row::new(1, "A"), Row::new(2, "B")];
        let before = records.clone();
        let sort = SortSpec::asc("name");
        let page = PageSpec::new(1, 2);

        let first = compute_view(&records, &sort, &page).unwrap();
        let second = compute_view(&records, &sort, &page).unwrap();

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_missing_field_is_error() {
        let records = vec![Row::new(1, "A")];
        let err = compute_view(&records, &SortSpec::asc("unknown"), &PageSpec::new(1, 10)).unwrap_err();
        assert_eq!(
            err,
            ViewError::MissingField {
                field: "unknown".to_string(),
                record_key: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_mixed_kinds_is_error() {
        let mut records = vec![Row::new(1, "A"), Row::new(2, "B")];
        records[1].score = FieldValue::text("high");

        let err = compute_view(&records, &SortSpec::asc("score"), &PageSpec::new(1, 10)).unwrap_err();
        assert_eq!(
            err,
            ViewError::IncomparableValues {
                field: "score".to_string(),
                left: ValueKind::Numeric,
                right: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_empty_values_sort_first() {
        let mut records = vec![Row::new(1, "A"), Row::new(2, "B"), Row::new(3, "C")];
        records[1].score = FieldValue::Empty;

        let view = compute_view(&records, &SortSpec::asc("score"), &PageSpec::new(1, 10)).unwrap();
        assert_eq!(ids(&view, |r| r.id), vec![2, 1, 3]);
    }

    #[test]
    fn test_zero_page_size_is_error() {
        let records = numbered(3);
        let err = compute_view(&records, &SortSpec::asc("id"), &PageSpec::new(1, 0)).unwrap_err();
        assert_eq!(err, ViewError::InvalidPageSize(0));
    }

    #[test]
    fn test_filtered_view_counts_only_matches() {
        let records = numbered(25);
        let filter = RecordFilter::new("Row 1", None);
        let view = compute_view_filtered(
            &records,
            &filter,
            &SortSpec::desc("id"),
            &PageSpec::new(1, 5),
        )
        .unwrap();

        // "Row 1" совпадает с Row 10..Row 19
        assert_eq!(view.total_records, 10);
        assert_eq!(view.total_pages, 2);
        assert_eq!(ids(&view, |r| r.id), vec![19, 18, 17, 16, 15]);
    }
}
