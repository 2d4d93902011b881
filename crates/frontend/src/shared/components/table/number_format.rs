//! Утилиты форматирования денежных сумм и процентов для таблиц

/// Вставляет точку каждые 3 цифры с конца: 1500000 -> "1.500.000"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Форматирует сумму в рупиях
///
/// # Примеры
///
/// ```text
/// let formatted = format_rupiah(1500000);
/// assert_eq!(formatted, "Rp 1.500.000");
/// ```
pub fn format_rupiah(value: i64) -> String {
    format!("Rp {}", format_thousands(value))
}

/// Сумма с дробной частью округляется до целых рупий
pub fn format_rupiah_f64(value: f64) -> String {
    format_rupiah(value.round() as i64)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Разбирает введённую сумму: допускает "Rp", пробелы и разделители
/// разрядов `.` или `,`
pub fn parse_rupiah(input: &str) -> Option<i64> {
    let digits: String = input
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' '))
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(1_500_000), "Rp 1.500.000");
        assert_eq!(format_rupiah(50_000_000), "Rp 50.000.000");
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(-1_234), "Rp -1.234");
    }

    #[test]
    fn test_format_rupiah_f64() {
        assert_eq!(format_rupiah_f64(1234.6), "Rp 1.235");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(91.26), "91.3%");
    }

    #[test]
    fn test_parse_rupiah() {
        assert_eq!(parse_rupiah("Rp 1.500.000"), Some(1_500_000));
        assert_eq!(parse_rupiah("25000"), Some(25_000));
        assert_eq!(parse_rupiah("1,500,000"), Some(1_500_000));
        assert_eq!(parse_rupiah("Rp 2,750,000"), Some(2_750_000));
        assert_eq!(parse_rupiah(""), None);
        assert_eq!(parse_rupiah("abc"), None);
    }
}
