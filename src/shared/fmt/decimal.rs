//! Decimal formatting utilities for human-readable display.
//!
//! Fixed-point rendering of `rust_decimal::Decimal` amounts with an explicit
//! number of decimal places and optional thousands separators.

use crate::shared::round_half_away;
use rust_decimal::Decimal;

/// Format a `Decimal` with exactly `decimals` fractional digits.
///
/// Halves round away from zero, short values are zero-padded
/// (`1.5` at 2 places is `"1.50"`). Zero decimals renders the integer part only.
pub fn fixed(value: &Decimal, decimals: u32) -> String {
    let mut rounded = round_half_away(*value, decimals);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{:.precision$}", rounded, precision = decimals as usize)
}

/// Same as [`fixed`], with `,` inserted between thousands of the integer part.
pub fn fixed_grouped(value: &Decimal, decimals: u32) -> String {
    group_thousands(&fixed(value, decimals))
}

/// Insert thousands separators into an already formatted number string.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let grouped = integer_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_pads_to_precision() {
        assert_eq!(fixed(&dec("1.5"), 2), "1.50");
        assert_eq!(fixed(&dec("5"), 2), "5.00");
        assert_eq!(fixed(&dec("0.1"), 4), "0.1000");
    }

    #[test]
    fn test_fixed_rounds_half_away_from_zero() {
        assert_eq!(fixed(&dec("1.235"), 2), "1.24");
        assert_eq!(fixed(&dec("1.234"), 2), "1.23");
        assert_eq!(fixed(&dec("-1.235"), 2), "-1.24");
    }

    #[test]
    fn test_fixed_zero_decimals() {
        assert_eq!(fixed(&dec("0.75"), 0), "1");
        assert_eq!(fixed(&dec("12.49"), 0), "12");
        assert_eq!(fixed(&dec("2.5"), 0), "3");
    }

    #[test]
    fn test_fixed_no_negative_zero() {
        assert_eq!(fixed(&dec("-0.001"), 2), "0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-1234.50"), "-1,234.50");
        assert_eq!(group_thousands("-100"), "-100");
    }

    #[test]
    fn test_fixed_grouped() {
        assert_eq!(fixed_grouped(&dec("1234567.005"), 2), "1,234,567.01");
        assert_eq!(fixed_grouped(&dec("999.999"), 2), "1,000.00");
    }
}
