//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues when summing expenses. Snapshots carry amounts as plain JSON numbers
//! in currency units (`35.5`, `2000.0`), so serde goes through `f64` at the
//! boundary and rounds to the nearest cent. Amounts read from text or a
//! snapshot are capped at [`Money::MAX`] so that path stays exact.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input or a snapshot (10 trillion units)
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use envelope_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use envelope_tracker::models::Money;
    /// let amount = Money::from_units_cents(10, 50); // 10.50
    /// ```
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a Money amount from a floating-point number of units,
    /// rounded to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and amounts beyond [`Money::MAX`].
    pub fn from_units_f64(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        let cents = (units * 100.0).round();
        if cents.abs() > Self::MAX.0 as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a Money amount from cents, or `None` beyond [`Money::MAX`]
    pub fn checked_from_cents(cents: i64) -> Option<Self> {
        (cents.checked_abs()? <= Self::MAX.0).then_some(Self(cents))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Amount in currency units as a float, for the snapshot format
    pub fn as_units_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Percentage of `whole` that this amount represents
    ///
    /// Returns `None` when `whole` is zero.
    pub fn percent_of(&self, whole: Money) -> Option<f64> {
        if whole.is_zero() {
            None
        } else {
            Some(self.0 as f64 * 100.0 / whole.0 as f64)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "€10.50", "10.50€", "$10.50",
    /// "10,50", "10", ".5". Extra decimals round to the nearest cent, half away
    /// from zero. Amounts beyond [`Money::MAX`] are out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped.trim_start())
        } else {
            (false, s)
        };

        let s = s
            .trim_start_matches(['€', '$'])
            .trim_end_matches(['€', '$'])
            .trim();
        let s = s.replace(',', ".");

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (whole_str, frac_str) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s.as_str(), None),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole_str) || frac_str.is_some_and(|f| !all_digits(f)) {
            return Err(invalid());
        }

        let units: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };

        // Frac is ASCII digits only, so byte indexing is safe
        let cents: i64 = match frac_str {
            None | Some("") => {
                if whole_str.is_empty() {
                    return Err(invalid());
                }
                0
            }
            Some(f) if f.len() == 1 => f.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(f) => {
                let kept: i64 = f[..2].parse().map_err(|_| invalid())?;
                let round_up = f.as_bytes().get(2).is_some_and(|d| *d >= b'5');
                kept + i64::from(round_up)
            }
        };

        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());
        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Self::checked_from_cents(if negative { -total } else { total }).ok_or_else(out_of_range)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an amount in currency units")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                v.checked_mul(100)
                    .and_then(Money::checked_from_cents)
                    .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .and_then(Money::checked_from_cents)
                    .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
                Money::from_units_f64(v)
                    .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

// Totals saturate instead of wrapping; single amounts are already capped at MAX
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
