//! Type-safe price representation using decimal arithmetic.
//!
//! All catalog prices are end-consumer EUR amounts including VAT. Arithmetic
//! stays in [`Decimal`] the whole way through; rounding happens exactly once,
//! at display time.

use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An EUR amount.
///
/// Wraps a [`Decimal`] so prices can never silently mix with other numbers.
/// [`Price::display`] renders the German locale form used across the
/// storefront (`1.234,56 €`): half-up rounding, exactly two fraction digits,
/// dot-grouped thousands, comma decimal separator.
///
/// # Example
///
/// ```
/// use casekompass_core::Price;
///
/// let price = Price::from_cents(2490);
/// assert_eq!(price.display(), "24,90 €");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero euros.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal EUR amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in euro cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal EUR amount, unrounded.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display in the German locale, e.g. `1.234,56 €`.
    ///
    /// The amount is rounded half-up to two fraction digits here and nowhere
    /// else, so a grand total formed by summing exact line totals is rounded
    /// exactly once.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = rounded.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int, frac)) => (int.to_owned(), format!("{frac:0<2}")),
            None => (text, "00".to_owned()),
        };

        // Group the integer digits in threes, separated by dots.
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        let int_grouped: String = grouped.chars().rev().collect();

        format!("{sign}{int_grouped},{frac_part} €")
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
