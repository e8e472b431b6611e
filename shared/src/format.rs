//! Locale formatting helpers for currency amounts and dates.
//!
//! The dashboard renders values the way the ledger service's web client
//! does: Brazilian Real with `.` thousands grouping and `,` decimals
//! (`R$ 1.234,56`), dates as `dd/mm/yyyy`.

use chrono::{DateTime, Utc};

/// Formats an amount in Brazilian Real, e.g. `R$ 1.234,56`.
///
/// Negative amounts carry a leading minus (`-R$ 10,00`); the net total on
/// the balance card can go below zero.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Formats a numeric string (the balance fields arrive as strings).
///
/// Anything unparseable formats as `R$ 0,00` so an absent or malformed
/// balance never breaks the cards.
pub fn format_brl_str(value: &str) -> String {
    format_brl(value.trim().parse::<f64>().unwrap_or(0.0))
}

/// Formats a timestamp as a `dd/mm/yyyy` calendar date.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(100.0), "R$ 100,00");
        assert_eq!(format_brl(40.0), "R$ 40,00");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(0.1), "R$ 0,10");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-10.0), "-R$ 10,00");
        assert_eq!(format_brl(-1234.5), "-R$ 1.234,50");
    }

    #[test]
    fn test_format_brl_rounds_to_cents() {
        assert_eq!(format_brl(19.999), "R$ 20,00");
        assert_eq!(format_brl(0.005), "R$ 0,01");
    }

    #[test]
    fn test_format_brl_str() {
        assert_eq!(format_brl_str("60.00"), "R$ 60,00");
        assert_eq!(format_brl_str(" 100.5 "), "R$ 100,50");
        assert_eq!(format_brl_str("-25"), "-R$ 25,00");
        assert_eq!(format_brl_str(""), "R$ 0,00");
        assert_eq!(format_brl_str("not a number"), "R$ 0,00");
    }

    #[test]
    fn test_format_date() {
        let date: DateTime<Utc> = "2024-04-02T12:30:00Z".parse().unwrap();
        assert_eq!(format_date(&date), "02/04/2024");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let date: DateTime<Utc> = "2021-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_brl(42.42), format_brl(42.42));
        assert_eq!(format_brl_str("42.42"), format_brl_str("42.42"));
        assert_eq!(format_date(&date), format_date(&date));
    }
}
