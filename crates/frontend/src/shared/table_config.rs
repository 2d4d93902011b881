//! Доступ к встроенной конфигурации таблиц из страниц-списков

use contracts::shared::config::{load_table_config, TableConfig, TableDefaults};
use once_cell::sync::Lazy;

static TABLE_CONFIG: Lazy<TableConfig> = Lazy::new(|| match load_table_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("{:#}", e);
        TableConfig::default()
    }
});

/// Сортировка и размер страницы по умолчанию для таблицы
pub fn table_defaults(table: &str) -> TableDefaults {
    TABLE_CONFIG.defaults_for(table)
}

pub fn page_size_options() -> Vec<usize> {
    TABLE_CONFIG.page_size_options.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_defaults_from_embedded_config() {
        let defaults = table_defaults("a003_order");
        assert_eq!(defaults.sort_field, "order_date");
        assert!(!defaults.sort_direction.is_ascending());
        assert_eq!(page_size_options(), vec![10, 20, 50, 100]);
    }
}
