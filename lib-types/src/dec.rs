//! Fixed-precision decimal arithmetic
//!
//! Every monetary quantity in reward distribution is a [`Dec`]: a signed
//! decimal with exactly 18 fractional digits, stored as an `i128` count of
//! 10^-18 units.
//!
//! # Determinism
//!
//! - No floats anywhere
//! - Products and quotients are computed in 256-bit unsigned space and
//!   truncated toward zero exactly once
//! - Overflow is reported as `None`, never wrapped or saturated
//!
//! ```text
//! mul_truncate(a, b) = trunc(a.raw * b.raw / 10^18)
//! quo_truncate(a, b) = trunc(a.raw * 10^18 / b.raw)
//! ```

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::DecError;
use crate::primitives::Amount;

/// Number of fractional digits carried by every [`Dec`]
pub const DEC_PRECISION: u32 = 18;

/// Raw units per whole number (10^18)
const PRECISION_MULTIPLIER: i128 = 1_000_000_000_000_000_000;

/// Signed 18-digit fixed-point decimal
///
/// The raw value is an `i128`, so the range is roughly ±1.7e20 whole
/// units. That covers any supply in a 6-decimal denom, but a denom with
/// 18 base-unit decimals tops out near 170 whole tokens. Arithmetic past
/// the range returns `None` from the `checked_*` methods, which callers
/// surface as an overflow error.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dec(i128);

impl Dec {
    /// Zero
    pub const ZERO: Dec = Dec(0);

    /// One
    pub const ONE: Dec = Dec(PRECISION_MULTIPLIER);

    /// Build from a raw count of 10^-18 units
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Raw count of 10^-18 units
    pub const fn raw(&self) -> i128 {
        self.0
    }

    /// Whole number `value`
    pub fn from_int(value: i64) -> Self {
        Self(value as i128 * PRECISION_MULTIPLIER)
    }

    /// Whole number `value` (always representable: 2^64 * 10^18 < 2^127)
    pub fn from_u64(value: u64) -> Self {
        Self(value as i128 * PRECISION_MULTIPLIER)
    }

    /// Whole token amount, `None` if it exceeds the representable range
    pub fn checked_from_amount(value: Amount) -> Option<Self> {
        let value = i128::try_from(value).ok()?;
        value.checked_mul(PRECISION_MULTIPLIER).map(Self)
    }

    /// `value * 10^-precision`, e.g. `with_precision(2, 2) == 0.02`
    ///
    /// # Panics
    ///
    /// Panics if `precision > 18`. Intended for constants.
    pub fn with_precision(value: i64, precision: u32) -> Self {
        assert!(precision <= DEC_PRECISION, "precision {} exceeds {}", precision, DEC_PRECISION);
        Self(value as i128 * 10i128.pow(DEC_PRECISION - precision))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Dec) -> Option<Dec> {
        self.0.checked_add(other.0).map(Dec)
    }

    pub fn checked_sub(self, other: Dec) -> Option<Dec> {
        self.0.checked_sub(other.0).map(Dec)
    }

    /// `self * other`, truncated toward zero
    pub fn checked_mul_truncate(self, other: Dec) -> Option<Dec> {
        mul_div_truncate(self.0, other.0, PRECISION_MULTIPLIER).map(Dec)
    }

    /// `self / other`, truncated toward zero. `None` on division by zero.
    pub fn checked_quo_truncate(self, other: Dec) -> Option<Dec> {
        mul_div_truncate(self.0, PRECISION_MULTIPLIER, other.0).map(Dec)
    }

    /// `self * n` (exact)
    pub fn checked_mul_int(self, n: i64) -> Option<Dec> {
        self.0.checked_mul(n as i128).map(Dec)
    }

    /// `self / n`, truncated toward zero. `None` on division by zero.
    pub fn checked_quo_int(self, n: u64) -> Option<Dec> {
        if n == 0 {
            return None;
        }
        Some(Dec(self.0 / n as i128))
    }

    /// Integer part, truncated toward zero
    pub fn truncate_int(&self) -> i128 {
        self.0 / PRECISION_MULTIPLIER
    }

    /// Drop the fractional part, keeping the value a [`Dec`]
    pub fn truncate(&self) -> Dec {
        Dec(self.truncate_int() * PRECISION_MULTIPLIER)
    }

    /// Clamp into `[min, max]`
    pub fn clamp_to(self, min: Dec, max: Dec) -> Dec {
        self.max(min).min(max)
    }
}

/// `a * b / d` over magnitudes in U256, sign reapplied, truncated toward zero
fn mul_div_truncate(a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    let negative = (a < 0) ^ (b < 0) ^ (d < 0);
    let numerator = U256::from(a.unsigned_abs()).checked_mul(U256::from(b.unsigned_abs()))?;
    let quotient = numerator / U256::from(d.unsigned_abs());
    if quotient > U256::from(i128::MAX as u128) {
        return None;
    }
    let magnitude = quotient.low_u128() as i128;
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / PRECISION_MULTIPLIER as u128;
        let frac = magnitude % PRECISION_MULTIPLIER as u128;
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}.{:018}", whole, frac)
    }
}

impl fmt::Debug for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dec({})", self)
    }
}

impl FromStr for Dec {
    type Err = DecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecError::Empty);
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) || body.ends_with('.') {
            return Err(DecError::InvalidFormat(s.to_string()));
        }
        if frac.len() > DEC_PRECISION as usize {
            return Err(DecError::TooManyDecimals(frac.len()));
        }

        let whole: i128 = whole.parse().map_err(|_| DecError::OutOfRange)?;
        let frac_raw: i128 = if frac.is_empty() {
            0
        } else {
            let digits: i128 = frac.parse().map_err(|_| DecError::OutOfRange)?;
            digits * 10i128.pow(DEC_PRECISION - frac.len() as u32)
        };

        let raw = whole
            .checked_mul(PRECISION_MULTIPLIER)
            .and_then(|w| w.checked_add(frac_raw))
            .ok_or(DecError::OutOfRange)?;

        Ok(Dec(if negative { -raw } else { raw }))
    }
}

impl From<u64> for Dec {
    fn from(value: u64) -> Self {
        Dec::from_u64(value)
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
