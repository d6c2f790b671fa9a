use chrono::NaiveDateTime;

/// Currency suffix used by every agency on the platform.
pub const CURRENCY: &str = "FCFA";

/// Format an amount for display, rounded to the unit with thousands grouped by a space.
///
/// `12500.0` becomes `"12 500 FCFA"`.
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{} {}", grouped, CURRENCY)
    } else {
        format!("{} {}", grouped, CURRENCY)
    }
}

/// Departure timestamps are shown as `dd/mm/YYYY HH:MM`.
pub fn format_departure(at: &NaiveDateTime) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0.0), "0 FCFA");
        assert_eq!(format_price(500.0), "500 FCFA");
        assert_eq!(format_price(12500.0), "12 500 FCFA");
        assert_eq!(format_price(1_250_000.4), "1 250 000 FCFA");
        assert_eq!(format_price(-3000.0), "-3 000 FCFA");
    }

    #[test]
    fn test_format_departure() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 15)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(format_departure(&at), "15/10/2026 08:05");
    }
}
