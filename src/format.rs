//! Number and time formatting for display
//!
//! Amounts follow en-US conventions: comma thousands separators, a dot
//! decimal separator and half-up rounding of the shortest decimal
//! representation, so `1.005` becomes `1.01`.

use chrono::{DateTime, TimeZone};

/// Format an amount with exactly two decimals and thousands grouping.
pub fn format_currency(value: f64) -> String {
    format_grouped(value, 2)
}

/// Format a number with `decimals` fraction digits and thousands grouping.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Shortest round-trip decimal; Rust never switches to exponent notation here.
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, f),
        None => (repr.as_str(), ""),
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|digit| *digit >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let int_len = digits.len() - decimals;
    let int_digits: String = digits[..int_len].iter().map(|d| (b'0' + d) as char).collect();
    let frac_digits: String = digits[int_len..].iter().map(|d| (b'0' + d) as char).collect();

    // Negative values keep their sign even when they round to zero.
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if decimals == 0 {
        format!("{}{}", sign, group_thousands(&int_digits))
    } else {
        format!("{}{}.{}", sign, group_thousands(&int_digits), frac_digits)
    }
}

/// Insert a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Hour and minute in en-US 12-hour form with a two-digit hour, e.g. `09:05 AM`.
pub fn format_clock_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1234567.5), "1,234,567.50");
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.999), "1,000.00");
        assert_eq!(format_currency(100.0), "100.00");
        assert_eq!(format_currency(1000.0), "1,000.00");
        assert_eq!(format_currency(12.3), "12.30");
    }

    #[test]
    fn test_format_currency_rounds_half_up() {
        assert_eq!(format_currency(1.005), "1.01");
        assert_eq!(format_currency(0.125), "0.13");
        assert_eq!(format_currency(2.344), "2.34");
    }

    #[test]
    fn test_format_currency_negative_and_special() {
        assert_eq!(format_currency(-1234.5), "-1,234.50");
        assert_eq!(format_currency(-0.001), "-0.00");
        assert_eq!(format_currency(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::INFINITY), "∞");
    }

    #[test]
    fn test_format_grouped_without_decimals() {
        assert_eq!(format_grouped(2500000.0, 0), "2,500,000");
        assert_eq!(format_grouped(1499.5, 0), "1,500");
    }

    #[test]
    fn test_format_clock_time() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let morning = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap();
        assert_eq!(format_clock_time(&morning), "09:05 AM");

        let evening = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
            .and_local_timezone(offset)
            .unwrap();
        assert_eq!(format_clock_time(&evening), "06:30 PM");
    }
}
