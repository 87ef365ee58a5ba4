//! Integer newtype that only exposes checked arithmetic.
//!
//! `ScalarInt` deliberately has no `Add`/`Sub`/`Mul`/`Div`/`Rem` impls. Every
//! arithmetic special form goes through a `checked_*` method and has to deal
//! with the `None` (overflow or zero divisor) case explicitly.

use std::fmt;

/// The language's only numeric type: a 64-bit signed integer.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ScalarInt(i64);

impl ScalarInt {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }

    /// Division rounding towards negative infinity.
    ///
    /// `-7 / 2` is `-4`, not `-3`. `None` on a zero divisor or on
    /// `i64::MIN / -1`.
    pub fn checked_floor_div(self, rhs: Self) -> Option<Self> {
        let div = self.0.checked_div(rhs.0)?;
        let rem = self.0.checked_rem(rhs.0)?;
        if rem != 0 && (rem < 0) != (rhs.0 < 0) {
            div.checked_sub(1).map(Self)
        } else {
            Some(Self(div))
        }
    }

    /// Remainder matching [`checked_floor_div`](Self::checked_floor_div).
    ///
    /// The result is zero or has the sign of the divisor, so
    /// `a == b * floor_div(a, b) + floor_mod(a, b)` always holds. `None` only
    /// on a zero divisor.
    pub fn checked_floor_mod(self, rhs: Self) -> Option<Self> {
        if rhs.0 == -1 {
            // i64::MIN % -1 overflows in hardware but is mathematically 0.
            return Some(Self::ZERO);
        }
        let rem = self.0.checked_rem(rhs.0)?;
        if rem != 0 && (rem < 0) != (rhs.0 < 0) {
            rem.checked_add(rhs.0).map(Self)
        } else {
            Some(Self(rem))
        }
    }
}

impl From<i64> for ScalarInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ScalarInt> for i64 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        value.0
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
