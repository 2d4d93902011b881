//! Боковое меню со всеми страницами панели

use crate::layout::global_context::AppGlobalContext;
use crate::layout::page_labels::PAGES;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {PAGES.iter().map(|&(key, label, icon_name)| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.is_active(key)
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_page(key)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
