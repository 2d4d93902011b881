use crate::shared::list_state::ListState;
use crate::shared::table_config::table_defaults;
use contracts::domain::a002_credit::{mock_credit_accounts, CreditAccount, UtilizationLevel};
use leptos::prelude::*;

pub const TABLE_KEY: &str = "a002_credit";

#[derive(Clone, Debug, PartialEq)]
pub enum CreditDialog {
    GlobalSettings,
    CreditLimit(i64),
    PaymentTerms(i64),
}

pub type CreditListState = ListState<CreditAccount, CreditDialog>;

pub fn create_state() -> RwSignal<CreditListState> {
    RwSignal::new(ListState::load(
        mock_credit_accounts(),
        TABLE_KEY,
        &table_defaults(TABLE_KEY),
    ))
}

/// Подписи фильтра по уровню загрузки лимита
pub fn level_label(level: UtilizationLevel) -> &'static str {
    match level {
        UtilizationLevel::Normal => "Good Standing",
        UtilizationLevel::Warning => "Near Limit",
        UtilizationLevel::Critical => "Over Limit",
    }
}

pub fn level_options() -> Vec<(String, String)> {
    UtilizationLevel::all()
        .into_iter()
        .map(|l| (l.code().to_string(), level_label(l).to_string()))
        .collect()
}

/// CSS-класс полосы загрузки лимита
pub fn utilization_bar_class(level: UtilizationLevel) -> &'static str {
    match level {
        UtilizationLevel::Normal => "progress__bar progress__bar--success",
        UtilizationLevel::Warning => "progress__bar progress__bar--warning",
        UtilizationLevel::Critical => "progress__bar progress__bar--error",
    }
}

/// Ширина полосы, не больше 100%
pub fn utilization_bar_width(account: &CreditAccount) -> String {
    format!("width: {:.1}%;", account.utilization_percent().min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_credit::DEFAULT_PAYMENT_TERMS;

    fn state() -> CreditListState {
        ListState::load(mock_credit_accounts(), TABLE_KEY, &table_defaults(TABLE_KEY))
    }

    fn ids(s: &CreditListState) -> Vec<i64> {
        s.view.visible_records.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_initial_view_sorted_by_name() {
        let s = state();
        assert!(s.error.is_none());
        assert_eq!(ids(&s), vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_critical() {
        let mut s = state();
        s.set_status_filter(Some("critical".to_string()));
        assert_eq!(ids(&s), vec![2]);
        assert_eq!(s.view.total_records, 1);
    }

    #[test]
    fn test_sort_by_utilization_percent() {
        let mut s = state();
        s.toggle_sort("utilization_percent");
        // 75%, 80%, 90%
        assert_eq!(ids(&s), vec![1, 3, 2]);
        s.toggle_sort("utilization_percent");
        assert_eq!(ids(&s), vec![2, 3, 1]);
    }

    #[test]
    fn test_update_terms_keeps_position() {
        let mut s = state();
        s.update_item("1", |a| a.payment_terms = DEFAULT_PAYMENT_TERMS + 15);
        assert_eq!(s.find("1").map(|a| a.payment_terms), Some(45));
        assert_eq!(ids(&s), vec![3, 1, 2]);
    }

    #[test]
    fn test_bar_width_capped() {
        let mut account = state().items[0].clone();
        account.credit_utilization = account.credit_limit * 2;
        assert_eq!(utilization_bar_width(&account), "width: 100.0%;");
    }
}
