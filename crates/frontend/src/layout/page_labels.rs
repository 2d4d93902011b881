//! Заголовки страниц по ключу. Единственное место, где ключ страницы
//! сопоставляется с подписью в меню и заголовке.

pub const DEFAULT_PAGE: &str = "a001_customer";

/// Все страницы в порядке меню: (ключ, подпись, иконка)
pub const PAGES: &[(&str, &str, &str)] = &[
    ("a001_customer", "Customers", "customers"),
    ("a002_credit", "Credit Management", "credit"),
    ("a003_order", "Orders", "orders"),
    ("a004_product", "Products", "products"),
    ("a005_promotion", "Promotions", "promotions"),
    ("a006_delivery", "Delivery", "delivery"),
    ("a007_user", "Users", "users"),
];

pub fn page_label_for_key(key: &str) -> &'static str {
    PAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, label, _)| *label)
        .unwrap_or("Unknown page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_for_key() {
        assert_eq!(page_label_for_key("a003_order"), "Orders");
        assert_eq!(page_label_for_key("nope"), "Unknown page");
    }

    #[test]
    fn test_default_page_is_listed() {
        assert!(PAGES.iter().any(|(k, _, _)| *k == DEFAULT_PAGE));
    }
}
