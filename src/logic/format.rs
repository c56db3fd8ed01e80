//! Display formatting for money and dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Dollar amount with thousands separators. Whole amounts stay whole,
/// fractional ones keep two decimals.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{frac:02}")
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Value of an `<input type="date">`, or None when cleared/invalid.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// The inverse, for seeding date inputs.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(950.0), "$950");
        assert_eq!(format_money(3850.0), "$3,850");
        assert_eq!(format_money(1234567.0), "$1,234,567");
    }

    #[test]
    fn money_keeps_cents_when_fractional() {
        assert_eq!(format_money(1999.5), "$1,999.50");
        assert_eq!(format_money(0.05), "$0.05");
    }

    #[test]
    fn negative_money_keeps_the_sign_outside() {
        assert_eq!(format_money(-1200.0), "-$1,200");
    }

    #[test]
    fn dates_render_human_readable() {
        let d = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
        assert_eq!(format_date(d), "May 15, 2023");
        let at = Utc.with_ymd_and_hms(2023, 4, 2, 10, 30, 0).unwrap();
        assert_eq!(format_date_time(at), "Apr 2, 2023 10:30");
    }

    #[test]
    fn date_inputs_round_trip() {
        let d = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
        assert_eq!(date_input_value(d), "2023-05-15");
        assert_eq!(parse_date("2023-05-15"), Some(d));
        assert_eq!(parse_date("  2023-05-15 "), Some(d));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/05/2023"), None);
    }
}
