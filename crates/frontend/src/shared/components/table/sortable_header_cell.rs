//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Credit Limit"
//!     sort_field="credit_limit"
//!     align="right"
//!     current_sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Добавляет индикатор сортировки (▲▼) и передаёт имя поля в `on_sort`
/// при клике. Направление переключает вызывающая сторона через `toggle_sort`.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка из state
    #[prop(into)]
    current_sort: Signal<SortSpec>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    current_sort.with(|sort| get_sort_class(sort, &sort_field_for_class))
                }>
                    {move || {
                        current_sort.with(|sort| get_sort_indicator(sort, &sort_field_for_indicator))
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
