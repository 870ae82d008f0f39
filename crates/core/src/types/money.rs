//! Peso amounts with decimal arithmetic.
//!
//! Prices and cart amounts use [`rust_decimal::Decimal`] rather than floats
//! so that repeated additions stay exact (a cart line's amount must always
//! equal quantity times the unit selling price).

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::group_thousands;

/// A Philippine peso amount.
///
/// Serializes as a decimal string (e.g., `"168.50"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a raw decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from whole pesos.
    #[must_use]
    pub fn from_pesos(pesos: i64) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Create an amount from centavos (e.g., `6_500` is ₱65.00).
    #[must_use]
    pub fn from_centavos(centavos: i64) -> Self {
        Self(Decimal::new(centavos, 2))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether this is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Money {
    /// Format as a peso string with thousands grouping, e.g. `₱1,234.56`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self.0.round_dp(2);
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "₱{sign}{}.{frac_part}", group_thousands(int_part))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_pesos(0).to_string(), "₱0.00");
        assert_eq!(Money::from_centavos(6_500).to_string(), "₱65.00");
        assert_eq!(Money::from_centavos(123_456).to_string(), "₱1,234.56");
        assert_eq!(Money::from_pesos(60_000).to_string(), "₱60,000.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_centavos(-123_456).to_string(), "₱-1,234.56");
    }

    #[test]
    fn test_times_and_sum() {
        let price = Money::from_centavos(3_850);
        assert_eq!(price.times(3), Money::from_centavos(11_550));

        let total: Money = [Money::from_pesos(65), price].into_iter().sum();
        assert_eq!(total, Money::from_centavos(10_350));
    }

    #[test]
    fn test_serde_as_string() {
        let money = Money::from_centavos(16_850);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "\"168.50\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}
