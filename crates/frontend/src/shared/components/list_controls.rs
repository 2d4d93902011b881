//! Элементы управления страницы-списка, общие для всех страниц:
//! поиск и фильтр статуса над таблицей, пагинация под ней.

use super::pagination_controls::PaginationControls;
use crate::shared::list_state::ListState;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::table_config::page_size_options;
use contracts::shared::table_view::{SortSpec, TableRecord};
use leptos::prelude::*;

/// Поиск и фильтр статуса. `statuses`: пары (код, подпись); пустой список
/// скрывает фильтр.
#[component]
pub fn ListFilters<R, D>(
    state: RwSignal<ListState<R, D>>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional)]
    statuses: Vec<(String, String)>,
) -> impl IntoView
where
    R: TableRecord + Clone + Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
{
    let status_filter = move || {
        if statuses.is_empty() {
            return view! { <></> }.into_any();
        }
        let options = statuses.clone();
        view! {
            <div class="filter-panel__field">
                <label class="form__label">"Status"</label>
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let status = if value.is_empty() { None } else { Some(value) };
                        state.update(|s| s.set_status_filter(status));
                    }
                >
                    <option value="">"All"</option>
                    {options.into_iter().map(|(code, label)| {
                        let code_for_selected = code.clone();
                        view! {
                            <option
                                value=code
                                selected=move || state.with(|s| s.status_filter.as_deref() == Some(code_for_selected.as_str()))
                            >
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__field">
                <label class="form__label">"Search"</label>
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=Callback::new(move |query: String| state.update(|s| s.set_search_query(query)))
                    placeholder=placeholder
                />
            </div>
            {status_filter()}
        </div>
        {move || state.with(|s| s.banner()).map(|err| view! {
            <div class="alert alert--error">{err}</div>
        })}
    }
}

/// Пагинация, связанная с состоянием списка
#[component]
pub fn ListPagination<R, D>(state: RwSignal<ListState<R, D>>) -> impl IntoView
where
    R: TableRecord + Clone + Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
{
    view! {
        <PaginationControls
            current_page=Signal::derive(move || state.with(|s| s.view.page_index))
            total_pages=Signal::derive(move || state.with(|s| s.view.total_pages))
            total_count=Signal::derive(move || state.with(|s| s.view.total_records))
            range_start=Signal::derive(move || state.with(|s| s.view.range_start))
            range_end=Signal::derive(move || state.with(|s| s.view.range_end))
            page_size=Signal::derive(move || state.with(|s| s.page.page_size))
            on_page_change=Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)))
            on_page_size_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
            page_size_options=page_size_options()
        />
    }
}

/// Текущая сортировка и обработчик клика по заголовку для `SortableHeaderCell`
pub fn sort_bindings<R, D>(state: RwSignal<ListState<R, D>>) -> (Signal<SortSpec>, Callback<String>)
where
    R: TableRecord + Clone + Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
{
    let current = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    (current, on_sort)
}

/// Текущий диалог; пересчитывается только при открытии/закрытии
pub fn dialog_memo<R, D>(state: RwSignal<ListState<R, D>>) -> Memo<Option<D>>
where
    R: TableRecord + Clone + Send + Sync + 'static,
    D: PartialEq + Clone + Send + Sync + 'static,
{
    Memo::new(move |_| state.with(|s| s.dialog.current().cloned()))
}

/// Видимые записи текущей страницы
pub fn visible_rows<R, D>(state: RwSignal<ListState<R, D>>) -> Vec<R>
where
    R: TableRecord + Clone + Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
{
    state.with(|s| s.view.visible_records.clone())
}

/// Иконка-кнопка действия в строке таблицы
#[component]
pub fn RowAction(
    #[prop(into)]
    title: String,
    icon_name: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="button button--ghost button--small"
            title=title
            on:click=move |_| on_click.run(())
        >
            {icon(icon_name)}
        </button>
    }
}
