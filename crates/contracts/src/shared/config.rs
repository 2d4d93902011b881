//! Настройки таблиц списков: сортировка и размер страницы по умолчанию.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::table_view::{PageSpec, SortDirection, SortSpec};

/// Конфигурация, встроенная в приложение
pub const DEFAULT_TABLE_CONFIG: &str = r#"
page_size_options = [10, 20, 50, 100]

[tables.a001_customer]
sort_field = "name"
sort_direction = "asc"
page_size = 10
fields = ["name", "email", "credit_limit", "payment_terms", "status", "promo_notes"]

[tables.a002_credit]
sort_field = "name"
sort_direction = "asc"
page_size = 10
fields = ["name", "credit_limit", "payment_terms", "credit_utilization", "utilization_percent", "overdue_invoices"]

[tables.a003_order]
sort_field = "order_date"
sort_direction = "desc"
page_size = 10
fields = ["id", "customer_name", "order_date", "total", "status", "payment_status"]

[tables.a004_product]
sort_field = "name"
sort_direction = "asc"
page_size = 10
fields = ["name", "price", "is_available", "is_foc", "promotional_start"]

[tables.a005_promotion]
sort_field = "start_date"
sort_direction = "asc"
page_size = 10
fields = ["name", "start_date", "end_date", "discount_value", "status"]

[tables.a006_delivery]
sort_field = "planned_date"
sort_direction = "asc"
page_size = 10
fields = ["batch_id", "coordinator", "area", "status", "planned_date", "order_count"]

[tables.a007_user]
sort_field = "name"
sort_direction = "asc"
page_size = 10
fields = ["name", "email", "role", "status", "last_login"]
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid table config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Table '{table}': page size must be positive")]
    ZeroPageSize { table: String },

    #[error("Page size options must be non-empty and positive")]
    InvalidPageSizeOptions,

    #[error("Table '{table}': field '{field}' is not sortable")]
    UnknownSortField { table: String, field: String },
}

/// Настройки одной таблицы
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableDefaults {
    pub sort_field: String,
    #[serde(default)]
    pub sort_direction: SortDirection,
    pub page_size: usize,
    /// Поля, по которым разрешена сортировка
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            sort_field: "id".to_string(),
            sort_direction: SortDirection::Asc,
            page_size: 10,
            fields: vec!["id".to_string()],
        }
    }
}

impl TableDefaults {
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_field.clone(), self.sort_direction)
    }

    pub fn page_spec(&self) -> PageSpec {
        PageSpec::first(self.page_size)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Проверка имени поля до вызова сортировки
    pub fn validate_sort_field(&self, table: &str, field: &str) -> Result<(), ConfigError> {
        if self.is_sortable(field) {
            Ok(())
        } else {
            Err(ConfigError::UnknownSortField {
                table: table.to_string(),
                field: field.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableConfig {
    pub page_size_options: Vec<usize>,
    #[serde(default)]
    pub tables: BTreeMap<String, TableDefaults>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![10, 20, 50, 100],
            tables: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidPageSizeOptions);
        }

        for (table, defaults) in &self.tables {
            if defaults.page_size == 0 {
                return Err(ConfigError::ZeroPageSize {
                    table: table.clone(),
                });
            }
            defaults.validate_sort_field(table, &defaults.sort_field)?;
        }

        Ok(())
    }

    /// Настройки таблицы по ключу страницы (например, "a001_customer")
    pub fn defaults_for(&self, table: &str) -> TableDefaults {
        match self.tables.get(table) {
            Some(defaults) => defaults.clone(),
            None => {
                log::warn!("No table config for '{}', using defaults", table);
                TableDefaults::default()
            }
        }
    }
}

/// Загружает встроенную конфигурацию таблиц
pub fn load_table_config() -> anyhow::Result<TableConfig> {
    let config = TableConfig::from_toml_str(DEFAULT_TABLE_CONFIG)
        .context("Failed to load embedded table config")?;
    log::debug!("Table config loaded: {} tables", config.tables.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_table_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.tables.len(), 7);
    }

    #[test]
    fn test_page_sort_defaults() {
        let config = load_table_config().unwrap();
        assert_eq!(
            config.defaults_for("a003_order").sort_spec(),
            SortSpec::desc("order_date")
        );
        assert_eq!(
            config.defaults_for("a005_promotion").sort_spec(),
            SortSpec::asc("start_date")
        );
        assert_eq!(
            config.defaults_for("a006_delivery").page_spec(),
            PageSpec::new(1, 10)
        );
    }

    #[test]
    fn test_unknown_table_falls_back() {
        let config = load_table_config().unwrap();
        assert_eq!(config.defaults_for("missing"), TableDefaults::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml = r#"
page_size_options = [10]

[tables.broken]
sort_field = "name"
page_size = 0
fields = ["name"]
"#;
        let err = TableConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize { .. }));
    }

    #[test]
    fn test_sort_field_must_be_listed() {
        let toml = r#"
page_size_options = [10]

[tables.broken]
sort_field = "email"
page_size = 10
fields = ["name"]
"#;
        let err = TableConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSortField { .. }));
    }

    #[test]
    fn test_direction_defaults_to_ascending() {
        let toml = r#"
page_size_options = [25]

[tables.t]
sort_field = "name"
page_size = 25
fields = ["name"]
"#;
        let config = TableConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.defaults_for("t").sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = TableConfig::from_toml_str("page_size_options = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
