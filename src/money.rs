use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};

/// A signed currency amount with exactly two fractional digits.
///
/// Stored as an integer count of cents so that digit entry, backspace and
/// sign changes never pick up binary rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MIN: Money = Money(i64::MIN);
    pub const MAX: Money = Money(i64::MAX);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Shift every digit one place left and append `digit` as the new
    /// last cent. Negative amounts grow away from zero so the sign is kept.
    ///
    /// Returns `None` when the result does not fit.
    pub fn push_digit(self, digit: u8) -> Option<Self> {
        debug_assert!(digit <= 9);
        let shifted = self.0.checked_mul(10)?;
        let next = if self.is_negative() {
            shifted.checked_sub(i64::from(digit))?
        } else {
            shifted.checked_add(i64::from(digit))?
        };
        Some(Money(next))
    }

    /// Drop the last entered digit. Division truncates toward zero, so
    /// `0.05` becomes `0.00` and `-12.34` becomes `-1.23`.
    pub fn drop_last_digit(self) -> Self {
        Money(self.0 / 10)
    }

    /// Flip the sign. `None` only for [`Money::MIN`].
    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Money)
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Convert a decimal, rounding to cents with midpoints away from zero.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_i64())
            .map(Money)
            .ok_or(Error::OutOfRange(value))
    }

    /// Whole units and remaining cents of the absolute value.
    pub(crate) fn split_abs(self) -> (u64, u8) {
        let abs = self.0.unsigned_abs();
        (abs / 100, (abs % 100) as u8)
    }
}

impl From<Money> for Decimal {
    fn from(m: Money) -> Self {
        m.to_decimal()
    }
}

impl TryFrom<Decimal> for Money {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Money::from_decimal(value)
    }
}

/// The plain clipboard form: two fractional digits, `.` separator, no
/// grouping and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (units, cents) = self.split_abs();
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}{units}.{cents:02}")
    }
}
