// std imports
use std::{fmt, ops::Mul, str::FromStr};

// third-party imports
use derive_more::{Display, Into};
use serde::Deserialize;

// local imports
use crate::error::InvalidMultiplierError;

// ---

/// Upper bound (exclusive) of a sample.
pub const SAMPLE_SCALE: f64 = 100.0;

// Largest f64 strictly below 1.0.
const UNIT_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

// ---

/// Sample is a pseudo-random value in range [0, 100).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Into)]
pub struct Sample(f64);

impl Sample {
    /// Returns a sample if `value` is in range [0, 100).
    pub fn new(value: f64) -> Option<Self> {
        (0.0..SAMPLE_SCALE).contains(&value).then_some(Self(value))
    }

    /// Scales a unit value in range [0, 1) to a sample.
    ///
    /// Out of range values are clamped, NaN becomes zero.
    pub fn from_unit(unit: f64) -> Self {
        let unit = if unit >= 1.0 {
            UNIT_MAX
        } else if unit >= 0.0 {
            unit
        } else {
            0.0
        };
        Self(unit * SAMPLE_SCALE)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Float(self.0).fmt(f)
    }
}

impl Mul<Multiplier> for Sample {
    type Output = Scaled;

    #[inline]
    fn mul(self, rhs: Multiplier) -> Scaled {
        Scaled(self.0 * f64::from(rhs.0))
    }
}

// ---

/// Multiplier is a scaling factor in range [0, 9].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Deserialize)]
#[serde(try_from = "u8")]
pub struct Multiplier(u8);

impl Multiplier {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(9);
    pub const ONE: Self = Self(1);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 { Some(Self(value)) } else { None }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns all valid multipliers in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = InvalidMultiplierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidMultiplierError::new(value.to_string()))
    }
}

impl FromStr for Multiplier {
    type Err = InvalidMultiplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidMultiplierError::new(s))
    }
}

// ---

/// Scaled is a sample multiplied by a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Into)]
pub struct Scaled(f64);

impl Scaled {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Float(self.0).fmt(f)
    }
}

// ---

/// Draw is a single sample together with its scaled result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Draw {
    pub sample: Sample,
    pub result: Scaled,
}

// ---

// Shortest round-trip representation that always keeps a fractional part, i.e. `42.0` instead of `42`.
// Exponents carry a sign and at least two digits, i.e. `1e-05` and `1e+16`.
struct Float(f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = format!("{:?}", self.0);
        match repr.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&repr),
        }
    }
}

#[cfg(test)]
mod tests;
