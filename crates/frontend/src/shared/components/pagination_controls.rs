use crate::shared::icons::icon;
use leptos::prelude::*;

/// Номера страниц для кнопок: не больше `window` штук вокруг текущей
pub fn page_window(current: usize, total: usize, window: usize) -> Vec<usize> {
    let total = total.max(1);
    let window = window.max(1).min(total);
    let half = window / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total + 1 - window);
    (start..start + window).collect()
}

/// PaginationControls - пагинация под таблицей
///
/// Показывает "Showing X to Y of Z", кнопки страниц и выбор размера страницы.
/// Номера страниц с 1.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Всего записей после фильтра
    #[prop(into)]
    total_count: Signal<usize>,

    /// Первая показанная запись (с 1, 0 для пустого списка)
    #[prop(into)]
    range_start: Signal<usize>,

    /// Последняя показанная запись
    #[prop(into)]
    range_end: Signal<usize>,

    /// Текущий размер страницы
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Варианты размера страницы
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let default_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || format!(
                    "Showing {} to {} of {} results",
                    range_start.get(),
                    range_end.get(),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), 5)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active={page == current}
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(default_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_centered() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
    }
}
