//! Реестр страниц: единственное место маппинга ключа страницы на View.

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_credit::ui::list::CreditList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_promotion::ui::list::PromotionList;
use crate::domain::a006_delivery::ui::list::DeliveryList;
use crate::domain::a007_user::ui::list::UserList;
use leptos::prelude::*;

/// Рендерит страницу по ключу или заглушку для неизвестного ключа
pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_credit" => view! { <CreditList /> }.into_any(),
        "a003_order" => view! { <OrderList /> }.into_any(),
        "a004_product" => view! { <ProductList /> }.into_any(),
        "a005_promotion" => view! { <PromotionList /> }.into_any(),
        "a006_delivery" => view! { <DeliveryList /> }.into_any(),
        "a007_user" => view! { <UserList /> }.into_any(),
        _ => {
            log::warn!("Unknown page key: {}", key);
            view! {
                <div class="page">
                    <div class="alert alert--error">{format!("Unknown page: {}", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}
