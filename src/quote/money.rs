//! Currency amount formatting

use rust_decimal::{Decimal, RoundingStrategy};

/// `1234.5` -> `1,234.50`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}

/// Amount with a currency symbol, e.g. `$1,234.50`
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Rate as tabulated, without padding (`100`, `82.5`)
pub fn format_rate(symbol: &str, rate: Decimal) -> String {
    format!("{}{}", symbol, rate.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(999.999)), "1,000.00");
        assert_eq!(format_amount(dec!(1234.5)), "1,234.50");
        assert_eq!(format_amount(dec!(3260)), "3,260.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(-45.125)), "-45.13");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate("$", dec!(100.00)), "$100");
        assert_eq!(format_rate("$", dec!(82.50)), "$82.5");
    }
}
