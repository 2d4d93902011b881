/// Универсальные утилиты для работы со списками (поиск, индикаторы сортировки)
use contracts::shared::table_view::{SortSpec, MIN_SEARCH_LEN};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка перед применением поискового запроса
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поисковый запрос достаточной длины, чтобы фильтр сработал
pub fn is_search_active(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SEARCH_LEN
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        if sort.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} characters)...", MIN_SEARCH_LEN)
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Срабатывает только последний запрос из серии
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_search_active(&value.get()) { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::asc("name");
        assert_eq!(get_sort_indicator(&sort, "name"), " ▲");
        assert_eq!(get_sort_indicator(&SortSpec::desc("name"), "name"), " ▼");
        assert_eq!(get_sort_indicator(&sort, "email"), " ⇅");
    }

    #[test]
    fn test_search_activation() {
        assert!(!is_search_active("ab"));
        assert!(!is_search_active("  ab  "));
        assert!(is_search_active("abc"));
    }
}
