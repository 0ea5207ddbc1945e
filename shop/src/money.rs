//! Currency arithmetic and formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use crate::model::BasketLine;

/// Round to two decimal places. Negative zero comes back as `0.0`.
#[must_use]
pub fn round_pence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Sum of unit price times quantity over `lines`, rounded to pence.
#[must_use]
pub fn basket_total(lines: &[BasketLine]) -> f64 {
    round_pence(
        lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .fold(0.0, |acc, value| acc + value),
    )
}

/// Format as pounds sterling with two decimals, e.g. `£22.00`.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("£{:.2}", round_pence(value))
}
