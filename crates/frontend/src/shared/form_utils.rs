//! Разбор и проверка значений полей диалогов.
//! Ошибка возвращается текстом для показа под формой.

use super::components::table::number_format::parse_rupiah;
use chrono::NaiveDate;

pub type FieldResult<T> = Result<T, String>;

pub fn required(label: &str, value: &str) -> FieldResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(trimmed.to_string())
}

pub fn email(value: &str) -> FieldResult<String> {
    let value = required("Email", value)?;
    match value.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(value),
        _ => Err(format!("'{}' is not a valid email", value)),
    }
}

/// Неотрицательная сумма в рупиях
pub fn amount(label: &str, value: &str) -> FieldResult<i64> {
    match parse_rupiah(value) {
        Some(v) if v >= 0 => Ok(v),
        Some(_) => Err(format!("{} must not be negative", label)),
        None => Err(format!("{} must be a number", label)),
    }
}

pub fn count(label: &str, value: &str) -> FieldResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number", label))
}

/// Дата из `<input type="date">`
pub fn date(label: &str, value: &str) -> FieldResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", label))
}

pub fn optional_date(label: &str, value: &str) -> FieldResult<Option<NaiveDate>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        date(label, value).map(Some)
    }
}

pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required("Name", "  Budi "), Ok("Budi".to_string()));
        assert!(required("Name", "   ").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("siti.r@example.com").is_ok());
        assert!(email("siti.r").is_err());
        assert!(email("@example.com").is_err());
    }

    #[test]
    fn test_amount() {
        assert_eq!(amount("Credit Limit", "Rp 50.000.000"), Ok(50_000_000));
        assert_eq!(amount("Credit Limit", "50,000,000"), Ok(50_000_000));
        assert!(amount("Credit Limit", "-5").is_err());
        assert!(amount("Credit Limit", "lots").is_err());
    }

    #[test]
    fn test_count() {
        assert_eq!(count("Payment Terms", "30"), Ok(30));
        assert!(count("Payment Terms", "-1").is_err());
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(date("Planned Date", "2024-03-15"), Ok(d));
        assert_eq!(optional_date("Start", ""), Ok(None));
        assert!(date("Planned Date", "15/03/2024").is_err());
        assert_eq!(date_input_value(Some(d)), "2024-03-15");
    }
}
