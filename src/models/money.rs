//! Money type for representing euro amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Represents a monetary amount stored as cents (hundredths of a euro)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use poupar::models::Money;
    /// let amount = Money::from_cents(1050); // €10.50
    /// assert_eq!(amount.to_string(), "€10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// Convert a decimal amount (as sent by the backend) to the nearest cent
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Split this amount into `parts` equal shares, rounding each share up to
    /// the next cent. `parts` below 1 is treated as 1.
    pub fn split_ceil(&self, parts: i64) -> Self {
        let parts = parts.max(1);
        let share = self.0 / parts;
        if self.0 % parts > 0 {
            Self(share + 1)
        } else {
            Self(share)
        }
    }

    /// Return the larger of zero and this amount
    pub fn clamp_non_negative(&self) -> Self {
        Self(self.0.max(0))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10,50", "€10.50" and "10". Negative amounts are rejected
    /// because every amount the app collects is a target or a contribution.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let s = trimmed.strip_prefix('€').unwrap_or(trimmed).trim();
        let s = s.replace(',', ".");

        if s.is_empty() || s.starts_with('-') {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let cents = match s.split_once('.') {
            Some((whole, fraction)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole
                        .parse()
                        .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
                };

                if fraction.contains('.') || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
                }

                let fraction_cents: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().unwrap_or(0) * 10,
                    _ => fraction[..2].parse().unwrap_or(0),
                };

                whole
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction_cents))
            }
            None => s
                .parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?
                .checked_mul(100),
        };

        cents
            .map(Self)
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))
    }

    /// Format as a plain decimal without the currency symbol ("1200.00")
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.euros().abs(), self.cents_part())
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
            write!(f, "-€{}.{:02}", self.euros().abs(), self.cents_part())
        } else {
            write!(f, "€{}.{:02}", self.euros(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
