//! Fixed display formatting for amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_MAX_FRACTION_DIGITS};

/// Formats an amount the way the front ends show it: peso sign, comma
/// thousands separators, at most three fraction digits and no trailing zeros.
///
/// `10000` becomes `₱10,000`, `2500.50` becomes `₱2,500.5`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(DISPLAY_MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(CURRENCY_SYMBOL);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_whole_amounts() {
        assert_eq!(format_currency(dec!(0)), "₱0");
        assert_eq!(format_currency(dec!(999)), "₱999");
        assert_eq!(format_currency(dec!(10000)), "₱10,000");
        assert_eq!(format_currency(dec!(1234567)), "₱1,234,567");
    }

    #[test]
    fn test_format_drops_trailing_zeros() {
        assert_eq!(format_currency(dec!(2500.50)), "₱2,500.5");
        assert_eq!(format_currency(dec!(100.00)), "₱100");
    }

    #[test]
    fn test_format_rounds_to_three_places() {
        assert_eq!(format_currency(dec!(1.23456)), "₱1.235");
        assert_eq!(format_currency(dec!(0.0004)), "₱0");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(dec!(-1500)), "₱-1,500");
    }
}
