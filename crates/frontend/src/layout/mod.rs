pub mod center;
pub mod global_context;
pub mod left;
pub mod page_labels;

use global_context::AppGlobalContext;
use leptos::prelude::*;

use crate::shared::icons::icon;
use page_labels::page_label_for_key;

/// Оболочка приложения.
///
/// ```text
/// +------------------------------------------+
/// |              Top bar                      |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <div class="top-header">
                <button
                    class="top-header__toggle"
                    title="Toggle menu"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
                <span class="top-header__page">
                    {move || page_label_for_key(&ctx.active.get())}
                </span>
            </div>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
