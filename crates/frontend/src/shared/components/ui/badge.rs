use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса: вариант выбирается по коду статуса записи
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let class = format!("badge {}", badge_class(status_variant(&status)));

    view! {
        <span class=class>{status}</span>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Цвет бейджа по коду статуса любой из страниц
pub fn status_variant(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "active" | "available" | "delivered" | "paid" | "approved" | "normal" => "success",
        "pending" | "pending approval" | "pending verification" | "scheduled" | "in progress"
        | "warning" => "warning",
        "inactive" | "unavailable" | "cancelled" | "unpaid" | "overdue" | "ended"
        | "critical" => "error",
        "processing" | "ready for delivery" | "refunded" => "primary",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("Active"), "success");
        assert_eq!(status_variant("In Progress"), "warning");
        assert_eq!(status_variant("critical"), "error");
        assert_eq!(status_variant("whatever"), "neutral");
    }
}
