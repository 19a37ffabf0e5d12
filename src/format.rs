//! Formatting utilities

use chrono::Local;

/// Format an amount the way the salon prints prices: es-ES euro style,
/// with '.' grouping thousands, ',' before cents and a trailing symbol.
pub fn format_eur(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{sign}{grouped},{frac:02} €")
}

/// Today's date as an ISO `YYYY-MM-DD` string
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whole_euros() {
        assert_eq!(format_eur(45.0), "45,00 €");
    }

    #[test]
    fn test_cents_are_padded() {
        assert_eq!(format_eur(9.5), "9,50 €");
        assert_eq!(format_eur(0.05), "0,05 €");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_eur(1234.5), "1.234,50 €");
        assert_eq!(format_eur(1234567.89), "1.234.567,89 €");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_eur(0.0), "0,00 €");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_eur(-12.3), "-12,30 €");
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(format_eur(1.006), "1,01 €");
        assert_eq!(format_eur(1.004), "1,00 €");
    }

    #[test]
    fn test_current_date_shape() {
        let date = current_date();
        assert_eq!(date.len(), 10);
        let parts: Vec<&str> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }
}
