//! Состояние страницы-списка: записи, поиск, фильтр статуса, сортировка,
//! страница и открытый диалог. Видимый срез пересчитывается через
//! `compute_view_filtered` после каждого изменения.

use contracts::shared::config::TableDefaults;
use contracts::shared::dialog_state::DialogState;
use contracts::shared::table_view::{
    compute_view_filtered, toggle_sort, PageSpec, RecordFilter, SortSpec, TableRecord, ViewResult,
};
use std::fmt::Display;

#[derive(Clone, Debug)]
pub struct ListState<R, D> {
    /// Полная коллекция страницы; диалоги меняют только её
    pub items: Vec<R>,
    pub search_query: String,
    pub status_filter: Option<String>,
    pub sort: SortSpec,
    pub page: PageSpec,
    pub dialog: DialogState<D>,
    pub view: ViewResult<R>,
    /// Ошибка последнего пересчёта; сбрасывается при успешном
    pub error: Option<String>,
    /// Ошибка загрузки коллекции, держится до конца жизни страницы
    pub load_error: Option<String>,
    table: String,
    defaults: TableDefaults,
}

impl<R, D> ListState<R, D>
where
    R: TableRecord + Clone,
    D: PartialEq,
{
    pub fn new(items: Vec<R>, table: &str, defaults: &TableDefaults) -> Self {
        let mut state = Self {
            items,
            search_query: String::new(),
            status_filter: None,
            sort: defaults.sort_spec(),
            page: defaults.page_spec(),
            dialog: DialogState::Closed,
            view: ViewResult {
                visible_records: Vec::new(),
                total_records: 0,
                total_pages: 1,
                page_index: 1,
                range_start: 0,
                range_end: 0,
            },
            error: None,
            load_error: None,
            table: table.to_string(),
            defaults: defaults.clone(),
        };
        state.refresh_view();
        state
    }

    /// Загружает коллекцию; при ошибке страница остаётся пустой с сообщением
    pub fn load<E: Display>(
        loaded: Result<Vec<R>, E>,
        table: &str,
        defaults: &TableDefaults,
    ) -> Self {
        match loaded {
            Ok(items) => {
                log::debug!("{}: {} records", table, items.len());
                Self::new(items, table, defaults)
            }
            Err(e) => {
                log::error!("{}: {:#}", table, e);
                let mut state = Self::new(Vec::new(), table, defaults);
                state.load_error = Some(format!("Failed to load data: {}", e));
                state
            }
        }
    }

    pub fn filter(&self) -> RecordFilter {
        RecordFilter::new(self.search_query.clone(), self.status_filter.clone())
    }

    /// Пересчитывает видимый срез. Номер страницы синхронизируется с
    /// приведённым значением, чтобы кнопки пагинации не уходили за край.
    pub fn refresh_view(&mut self) {
        match compute_view_filtered(&self.items, &self.filter(), &self.sort, &self.page) {
            Ok(view) => {
                self.page.page_index = view.page_index;
                self.view = view;
                self.error = None;
            }
            Err(e) => {
                log::error!("compute_view failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Поле вне списка сортируемых игнорируется, текущая сортировка остаётся
    pub fn toggle_sort(&mut self, field: &str) {
        if let Err(e) = self.defaults.validate_sort_field(&self.table, field) {
            log::warn!("{}", e);
            return;
        }
        self.sort = toggle_sort(&self.sort, field);
        self.page.page_index = 1;
        self.refresh_view();
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.page.page_index = 1;
        self.refresh_view();
    }

    pub fn set_status_filter(&mut self, status: Option<String>) {
        self.status_filter = status;
        self.page.page_index = 1;
        self.refresh_view();
    }

    pub fn go_to_page(&mut self, page_index: usize) {
        self.page.page_index = page_index;
        self.refresh_view();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageSpec::first(page_size);
        self.refresh_view();
    }

    /// Текст для баннера над таблицей
    pub fn banner(&self) -> Option<String> {
        self.load_error.clone().or_else(|| self.error.clone())
    }

    pub fn open_dialog(&mut self, dialog: D) {
        self.dialog.open(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn find(&self, key: &str) -> Option<&R> {
        self.items.iter().find(|item| item.record_key() == key)
    }

    /// Заменяет запись с тем же ключом или добавляет новую в конец
    pub fn upsert(&mut self, record: R) {
        let key = record.record_key();
        match self.items.iter_mut().find(|item| item.record_key() == key) {
            Some(existing) => *existing = record,
            None => self.items.push(record),
        }
        self.dialog.close();
        self.refresh_view();
    }

    pub fn update_item(&mut self, key: &str, change: impl FnOnce(&mut R)) {
        if let Some(item) = self.items.iter_mut().find(|item| item.record_key() == key) {
            change(item);
        } else {
            log::warn!("update_item: no record '{}'", key);
        }
        self.dialog.close();
        self.refresh_view();
    }

    pub fn remove(&mut self, key: &str) {
        self.items.retain(|item| item.record_key() != key);
        self.dialog.close();
        self.refresh_view();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_view::FieldValue;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        name: &'static str,
        active: bool,
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
            Some(if self.active { "Active" } else { "Inactive" }.to_string())
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Dialog {
        Edit(i64),
        Delete(i64),
    }

    fn rows(n: i64) -> Vec<Row> {
        (1..=n)
            .map(|id| Row {
                id,
                name: if id % 2 == 0 { "Even" } else { "Odd" },
                active: id % 3 != 0,
            })
            .collect()
    }

    fn defaults(page_size: usize) -> TableDefaults {
        TableDefaults {
            sort_field: "id".to_string(),
            page_size,
            fields: vec!["id".to_string(), "name".to_string()],
            ..TableDefaults::default()
        }
    }

    #[test]
    fn test_new_computes_first_page() {
        let state: ListState<Row, Dialog> = ListState::new(rows(25), "rows", &defaults(10));
        assert_eq!(state.view.visible_records.len(), 10);
        assert_eq!(state.view.total_pages, 3);
        assert_eq!(state.view.range_start, 1);
        assert_eq!(state.view.range_end, 10);
    }

    #[test]
    fn test_toggle_sort_resets_page() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(25), "rows", &defaults(10));
        state.go_to_page(3);
        assert_eq!(state.view.page_index, 3);

        state.toggle_sort("id");
        assert_eq!(state.page.page_index, 1);
        assert_eq!(state.view.visible_records[0].id, 25);
    }

    #[test]
    fn test_page_index_follows_clamping() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(25), "rows", &defaults(10));
        state.go_to_page(9);
        assert_eq!(state.page.page_index, 3);
        assert_eq!(state.view.visible_records.len(), 5);
    }

    #[test]
    fn test_status_filter_and_search() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(12), "rows", &defaults(10));
        state.set_status_filter(Some("Inactive".to_string()));
        let ids: Vec<i64> = state.view.visible_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 6, 9, 12]);

        state.set_search_query("even".to_string());
        let ids: Vec<i64> = state.view.visible_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6, 12]);
    }

    #[test]
    fn test_dialog_opens_one_at_a_time() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(3), "rows", &defaults(10));
        state.open_dialog(Dialog::Edit(1));
        state.open_dialog(Dialog::Delete(2));
        assert_eq!(state.dialog.current(), Some(&Dialog::Delete(2)));

        state.remove("2");
        assert!(!state.dialog.is_open());
        assert_eq!(state.view.total_records, 2);
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(2), "rows", &defaults(10));
        state.upsert(Row { id: 2, name: "Two", active: true });
        state.upsert(Row { id: 3, name: "Three", active: true });
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.find("2").map(|r| r.name), Some("Two"));
    }

    #[test]
    fn test_load_error_leaves_empty_page() {
        let loaded: Result<Vec<Row>, String> = Err("broken json".to_string());
        let state: ListState<Row, Dialog> = ListState::load(loaded, "rows", &defaults(10));
        assert!(state.items.is_empty());
        assert_eq!(state.view.total_pages, 1);
        assert!(state.load_error.is_some());
        assert!(state.error.is_none());
        assert_eq!(state.banner(), state.load_error);
    }

    #[test]
    fn test_zero_page_size_reports_error() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(3), "rows", &defaults(10));
        state.set_page_size(0);
        assert!(state.error.is_some());
        // предыдущий срез остаётся на экране
        assert_eq!(state.view.visible_records.len(), 3);
    }

    #[test]
    fn test_error_clears_after_recovery() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(3), "rows", &defaults(10));
        state.set_page_size(0);
        assert!(state.error.is_some());

        state.set_page_size(20);
        assert!(state.error.is_none());
        assert_eq!(state.banner(), None);
        assert_eq!(state.view.visible_records.len(), 3);
    }

    #[test]
    fn test_sort_error_clears_after_valid_sort() {
        // "active" разрешено конфигурацией, но у записей такого поля нет
        let mut table = defaults(10);
        table.fields.push("active".to_string());
        let mut state: ListState<Row, Dialog> = ListState::new(rows(3), "rows", &table);

        state.toggle_sort("active");
        assert!(state.error.is_some());

        state.toggle_sort("name");
        assert!(state.error.is_none());
        assert_eq!(state.view.visible_records.len(), 3);
    }

    #[test]
    fn test_unknown_sort_field_is_ignored() {
        let mut state: ListState<Row, Dialog> = ListState::new(rows(12), "rows", &defaults(10));
        state.go_to_page(2);

        state.toggle_sort("nope");
        assert_eq!(state.sort, SortSpec::asc("id"));
        assert_eq!(state.page.page_index, 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_load_error_survives_refresh() {
        let loaded: Result<Vec<Row>, String> = Err("broken json".to_string());
        let mut state: ListState<Row, Dialog> = ListState::load(loaded, "rows", &defaults(10));
        state.toggle_sort("name");
        assert!(state.load_error.is_some());
        assert!(state.banner().is_some());
    }
}
