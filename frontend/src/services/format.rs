/// Display currency symbol for all monetary figures.
pub const CURRENCY_SYMBOL: &str = "$";

/// Format an absolute amount with thousands separators and two decimals,
/// e.g. `1234567.5` → `"1,234,567.50"`.
pub fn thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}.{}", grouped, frac_part)
}

/// Signed currency string: `-1500.0` → `"-$1,500.00"`.
pub fn currency(value: f64) -> String {
    if value < 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, thousands(value))
    } else {
        format!("{}{}", CURRENCY_SYMBOL, thousands(value))
    }
}

/// Unsigned currency string for table cells where color carries the sign.
pub fn currency_abs(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, thousands(value))
}

/// Whole-number percent tick from a fraction: `0.423` → `"42%"`.
pub fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Date cell display: keep the calendar-date part of an ISO 8601 string.
pub fn display_date(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_groups_digits() {
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.0), "999.00");
        assert_eq!(thousands(1000.0), "1,000.00");
        assert_eq!(thousands(1234567.5), "1,234,567.50");
    }

    #[test]
    fn test_currency_keeps_sign() {
        assert_eq!(currency(5000.0), "$5,000.00");
        assert_eq!(currency(-1500.0), "-$1,500.00");
    }

    #[test]
    fn test_currency_abs_drops_sign() {
        assert_eq!(currency_abs(-200.0), "$200.00");
    }

    #[test]
    fn test_percent_rounds_to_whole_ticks() {
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(0.423), "42%");
        assert_eq!(percent(1.0), "100%");
    }

    #[test]
    fn test_display_date_strips_time_component() {
        assert_eq!(display_date("2024-01-17T09:30:00Z"), "2024-01-17");
        assert_eq!(display_date("2024-01-17"), "2024-01-17");
    }
}
