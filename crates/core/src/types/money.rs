//! Monetary amounts in minor currency units.
//!
//! All prices, discounts, and totals in QuickBite are whole numbers of the
//! smallest currency unit. Percentage discounts are the only place fractional
//! amounts can appear, and they are rounded half up to the minor unit
//! immediately (`MidpointAwayFromZero`), so a `Money` value is always exact.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An exact monetary amount in minor currency units.
///
/// ```
/// use quickbite_core::Money;
///
/// let subtotal = Money::from_minor_units(598);
/// assert_eq!(subtotal.percent(10), Money::from_minor_units(60)); // 59.8 rounds up
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from minor currency units.
    #[must_use]
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// The amount in minor currency units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity (line totals).
    #[must_use]
    pub const fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Take a percentage of this amount, rounded half up to the minor unit.
    ///
    /// This is the fixed rounding policy for promo discounts: 10% of 598 is
    /// 59.8, which rounds to 60.
    #[must_use]
    pub fn percent(&self, percent: u8) -> Self {
        let exact = Decimal::from(self.0) * Decimal::from(percent) / Decimal::from(100);
        let rounded = exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(rounded.to_i64().unwrap_or(i64::MAX))
    }

    /// Subtract, clamping at zero instead of going negative.
    #[must_use]
    pub const fn saturating_sub_to_zero(&self, other: Self) -> Self {
        let diff = self.0 - other.0;
        if diff < 0 { Self::ZERO } else { Self(diff) }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
