//! Money value object carried as integer minor units.
//!
//! Fees and payment amounts move through the service as cents. Conversion to
//! major units happens only at the DTO edge, so arithmetic never touches
//! floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Non-negative amount of money in minor currency units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from minor units, rejecting negatives.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        if cents < 0 {
            return Err(ValidationError::negative("amount", cents));
        }
        Ok(Self(cents))
    }

    /// Creates an amount from major units (e.g. the `membershipFee` field of
    /// a club creation request), rejecting negatives and NaN.
    pub fn from_major(major: f64) -> Result<Self, ValidationError> {
        if !major.is_finite() {
            return Err(ValidationError::invalid_format("amount", "not a finite number"));
        }
        let cents = (major * 100.0).round() as i64;
        Self::from_cents(cents)
    }

    /// Returns the amount in minor units.
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units for API responses.
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether this amount is zero (a free club or event).
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
