//! Format - Formatting Utilities

use crate::constants::COORDINATE_PRECISION;

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let grouped = group_thousands(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a price as dollars with separators, keeping cents only when present.
///
/// The sign goes in front of the dollar sign: `-$1,234.50`.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let cents = (price.abs() * 100.0).round();
    let sign = if price < 0.0 && cents > 0.0 { "-" } else { "" };
    let whole = group_thousands(&format!("{:.0}", (cents / 100.0).trunc()));
    let frac = (cents % 100.0) as u8;

    if frac == 0 {
        format!("{sign}${whole}")
    } else {
        format!("{sign}${whole}.{frac:02}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a coordinate pair for marker popups
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!(
        "{:.prec$}, {:.prec$}",
        latitude,
        longitude,
        prec = COORDINATE_PRECISION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-20000), "-20,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(20000.0), "$20,000");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(0.99), "$0.99");
    }

    #[test]
    fn test_format_price_negative_and_large() {
        assert_eq!(format_price(-0.5), "-$0.50");
        assert_eq!(format_price(-1234.5), "-$1,234.50");
        assert_eq!(format_price(-0.001), "$0");
        assert_eq!(format_price(1e16), "$10,000,000,000,000,000");
        assert_eq!(format_price(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_coordinates() {
        assert_eq!(format_coordinates(59.9, 30.3), "59.9000, 30.3000");
        assert_eq!(format_coordinates(0.0, -12.345678), "0.0000, -12.3457");
    }
}
