//! Сортировка, фильтрация и постраничный вывод списков в памяти.
//!
//! Общая логика всех страниц-списков: страница передаёт записи, текущую
//! сортировку и страницу, а получает видимый срез и данные для пагинации.

pub mod error;
pub mod filter;
pub mod page;
pub mod record;
pub mod sort;
pub mod value;
pub mod view;

pub use error::ViewError;
pub use filter::{filter_records, RecordFilter, MIN_SEARCH_LEN};
pub use page::{total_pages, PageSpec};
pub use record::TableRecord;
pub use sort::{toggle_sort, SortDirection, SortSpec};
pub use value::{FieldValue, ValueKind};
pub use view::{compute_view, compute_view_filtered, ViewResult};
