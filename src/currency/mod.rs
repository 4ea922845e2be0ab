//! Amount rendering for dashboards, printable reports and prompts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Digit grouping convention for the integer part of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `1,234,567.00`
    Western,
    /// `12,34,567.00`
    Indian,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
    grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("₹", Grouping::Indian)
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Symbol, grouped integer part and exactly two decimals, e.g. `-₹1,250.50`.
    pub fn format(&self, amount: Decimal) -> String {
        let fixed = fixed_2dp(amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = match self.grouping {
            Grouping::Western => group_western(int_part),
            Grouping::Indian => group_indian(int_part),
        };
        let sign = if is_negative(amount) { "-" } else { "" };
        format!("{sign}{}{grouped}.{frac_part}", self.symbol)
    }
}

/// Two fixed decimal places without grouping or symbol (`700.00`).
pub fn fixed_2dp(amount: Decimal) -> String {
    let mut value = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value.rescale(2);
    value.to_string()
}

/// Shortest exact rendering (`1000`, `12.5`), as written into CSV rows.
pub fn plain_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn is_negative(amount: Decimal) -> bool {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero) < Decimal::ZERO
}

fn group_western(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    for (count, ch) in head.chars().rev().enumerate() {
        if count != 0 && count % 2 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    format!("{grouped},{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fixed_two_places_pads_and_rounds() {
        assert_eq!(fixed_2dp(dec!(700)), "700.00");
        assert_eq!(fixed_2dp(dec!(12.5)), "12.50");
        assert_eq!(fixed_2dp(dec!(0.125)), "0.13");
        assert_eq!(fixed_2dp(dec!(-0.001)), "0.00");
    }

    #[test]
    fn plain_amount_drops_trailing_zeros() {
        assert_eq!(plain_amount(dec!(1000)), "1000");
        assert_eq!(plain_amount(dec!(12.50)), "12.5");
    }

    #[test]
    fn indian_grouping_uses_lakh_separators() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(dec!(123456)), "₹1,23,456.00");
        assert_eq!(format.format(dec!(12345678.9)), "₹1,23,45,678.90");
        assert_eq!(format.format(dec!(999)), "₹999.00");
    }

    #[test]
    fn western_grouping_and_negative_sign() {
        let format = CurrencyFormat::new("$", Grouping::Western);
        assert_eq!(format.format(dec!(1234567)), "$1,234,567.00");
        assert_eq!(format.format(dec!(-700)), "-$700.00");
    }
}
