//! Room price type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InvalidValueError;

/// A finite, non-negative room price.
///
/// Invalid prices are rejected rather than clamped.
///
/// # Examples
///
/// ```
/// use hotelier::Price;
///
/// let price = Price::try_from(129.5).unwrap();
/// assert_eq!(price.value(), 129.5);
///
/// assert!(Price::try_from(-1.0).is_err());
/// assert!(Price::try_from(f64::NAN).is_err());
/// assert!("12.x".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Returns the price as a number.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = InvalidValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(InvalidValueError::new("price", "must be a finite number"));
        }
        if value < 0.0 {
            return Err(InvalidValueError::new(
                "price",
                format!("{value} is negative"),
            ));
        }
        Ok(Self(value))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = InvalidValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidValueError::new("price", format!("'{s}' is not a number")))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
