//! Exact decimal currency amounts.
//!
//! Wraps `rust_decimal` so balances are compared and updated without any
//! floating-point error. Values keep the full precision they were created
//! with; only rendering is fixed at two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::SubAssign;
use std::str::FromStr;

/// A currency amount backed by an exact decimal.
///
/// Values never rescale and parsing never rounds, so a withdrawal one
/// hundredth of a cent over the balance is still detected.
/// `Display` always renders two decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use atm_ledger::Money;
///
/// let amount = Money::from_str("300.3").unwrap();
/// assert_eq!(amount.to_string(), "300.30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places used when rendering.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, keeping its precision.
    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    ///
    /// Negative zero (`-0.00`) is not negative.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Adds two amounts, returning `None` on decimal overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

/// Parses without rounding: input with more fractional digits than a
/// `Decimal` can hold is an error rather than a nearby value.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str_exact(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

// Only applied with `0 <= rhs <= self`; cannot overflow.
impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
