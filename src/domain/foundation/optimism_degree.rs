//! Optimism degree value object (0.0-1.0 scale) for the Hurwitz rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Hurwitz weight `h` between 0 and 1 inclusive.
///
/// `h = 0` weighs only the first outcome, `h = 1` only the second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OptimismDegree(f64);

impl OptimismDegree {
    /// Fully pessimistic weighting.
    pub const ZERO: Self = Self(0.0);

    /// Even weighting, used when the caller supplies no degree.
    pub const HALF: Self = Self(0.5);

    /// Fully optimistic weighting.
    pub const ONE: Self = Self(1.0);

    /// Creates a new degree, clamping to the valid range. NaN maps to [`Self::HALF`].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::HALF;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a degree, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "optimism_degree",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw weight.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Blends a pair of outcomes: `h * second + (1 - h) * first`.
    pub fn blend(&self, first: f64, second: f64) -> f64 {
        self.0 * second + (1.0 - self.0) * first
    }
}

impl Default for OptimismDegree {
    fn default() -> Self {
        Self::HALF
    }
}

impl fmt::Display for OptimismDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f64> for OptimismDegree {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<OptimismDegree> for f64 {
    fn from(degree: OptimismDegree) -> Self {
        degree.0
    }
}

impl FromStr for OptimismDegree {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| {
            ValidationError::invalid_format("optimism_degree", format!("'{}' is not a number", s))
        })?;
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_new_accepts_valid_values() {
        assert_eq!(OptimismDegree::new(0.0).value(), 0.0);
        assert_eq!(OptimismDegree::new(0.3).value(), 0.3);
        assert_eq!(OptimismDegree::new(1.0).value(), 1.0);
    }

    #[test]
    fn degree_new_clamps_to_unit_interval() {
        assert_eq!(OptimismDegree::new(-0.5).value(), 0.0);
        assert_eq!(OptimismDegree::new(7.0).value(), 1.0);
    }

    #[test]
    fn degree_new_maps_nan_to_half() {
        assert_eq!(OptimismDegree::new(f64::NAN), OptimismDegree::HALF);
    }

    #[test]
    fn degree_try_new_rejects_out_of_range() {
        match OptimismDegree::try_new(1.5) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "optimism_degree");
                assert_eq!(min, 0.0);
                assert_eq!(max, 1.0);
                assert_eq!(actual, 1.5);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn degree_try_new_rejects_infinity() {
        assert!(OptimismDegree::try_new(f64::INFINITY).is_err());
        assert!(OptimismDegree::try_new(f64::NAN).is_err());
    }

    #[test]
    fn degree_default_is_half() {
        assert_eq!(OptimismDegree::default(), OptimismDegree::HALF);
    }

    #[test]
    fn blend_weighs_second_outcome_by_degree() {
        assert_eq!(OptimismDegree::ZERO.blend(10.0, 20.0), 10.0);
        assert_eq!(OptimismDegree::ONE.blend(10.0, 20.0), 20.0);
        assert_eq!(OptimismDegree::HALF.blend(10.0, 20.0), 15.0);
    }

    #[test]
    fn degree_parses_from_str() {
        let degree: OptimismDegree = " 0.25 ".parse().unwrap();
        assert_eq!(degree.value(), 0.25);
        assert!("abc".parse::<OptimismDegree>().is_err());
        assert!("2".parse::<OptimismDegree>().is_err());
    }

    #[test]
    fn degree_displays_one_decimal() {
        assert_eq!(format!("{}", OptimismDegree::new(0.7)), "0.7");
        assert_eq!(format!("{}", OptimismDegree::ONE), "1.0");
    }

    #[test]
    fn degree_round_trips_through_json() {
        let json = serde_json::to_string(&OptimismDegree::new(0.25)).unwrap();
        assert_eq!(json, "0.25");
        let degree: OptimismDegree = serde_json::from_str("0.75").unwrap();
        assert_eq!(degree.value(), 0.75);
        assert!(serde_json::from_str::<OptimismDegree>("1.5").is_err());
    }
}
