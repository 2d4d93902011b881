//! PageFrame: корневая обёртка каждой страницы-списка.
//!
//! Ставит на корневой элемент `id` вида `"{entity}--list"` и
//! `data-page-category`, чтобы страницу было легко найти в DOM Inspector.

use leptos::prelude::*;

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_customer--list"`.
    page_id: &'static str,
    #[prop(optional, default = PAGE_CAT_LIST)]
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

/// Шапка страницы: заголовок, счётчик записей и кнопки действий
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(into)]
    total: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <span class="badge badge--primary">{move || total.get().to_string()}</span>
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
