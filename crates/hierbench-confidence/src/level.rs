//! Exact-rational confidence levels.
//!
//! Interval truncation indices are derived from the confidence level with
//! exact integer arithmetic. Computing the boundary `(1 - level) / 2 * n` in
//! binary floating point produces off-by-one truncation indices near exact
//! fractions (0.025 * 1000 is the classic case), so a confidence level can
//! only be constructed from representations with no rounding error: an
//! integer ratio or a decimal string.

use hierbench_core::{Error, Result};
use num_rational::Ratio;
use std::fmt;
use std::str::FromStr;

/// A confidence level in the open interval (0, 1), held as an exact ratio.
///
/// There is deliberately no constructor from `f64`: a binary float has
/// already lost the decimal value the caller meant, and the splitter's
/// index arithmetic must not inherit that error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfidenceLevel(Ratio<u64>);

impl ConfidenceLevel {
    /// Build a confidence level from an exact integer ratio.
    ///
    /// Fails with [`Error::InvalidConfidenceLevel`] unless
    /// `0 < numerator / denominator < 1`.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::InvalidConfidenceLevel(
                "denominator must be non-zero".to_string(),
            ));
        }
        if numerator == 0 || numerator >= denominator {
            return Err(Error::InvalidConfidenceLevel(format!(
                "{numerator}/{denominator} is not in the open interval (0, 1)"
            )));
        }
        Ok(Self(Ratio::new(numerator, denominator)))
    }

    /// The default 95% confidence level.
    pub fn ninety_five() -> Self {
        Self(Ratio::new(19, 20))
    }

    /// The exact ratio backing this level.
    pub(crate) fn ratio(&self) -> Ratio<u64> {
        self.0
    }

    /// The level as a float, for display and reporting only.
    pub fn value(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::ninety_five()
    }
}

impl FromStr for ConfidenceLevel {
    type Err = Error;

    /// Parse a decimal string such as `"0.95"` exactly.
    fn from_str(s: &str) -> Result<Self> {
        let digits = match s.strip_prefix("0.") {
            Some(d) if !d.is_empty() => d,
            _ => {
                return Err(Error::InvalidConfidenceLevel(format!(
                    "'{s}' is not a decimal in (0, 1)"
                )))
            }
        };
        if digits.len() > 18 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidConfidenceLevel(format!(
                "'{s}' is not a decimal in (0, 1)"
            )));
        }
        let numerator: u64 = digits.parse().map_err(|_| {
            Error::InvalidConfidenceLevel(format!("'{s}' is not a decimal in (0, 1)"))
        })?;
        let denominator = 10u64.pow(digits.len() as u32);
        Self::from_ratio(numerator, denominator)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio() {
        let level = ConfidenceLevel::from_ratio(95, 100).unwrap();
        assert_eq!(level, ConfidenceLevel::ninety_five());
        assert_eq!(level.value(), 0.95);
    }

    #[test]
    fn test_from_ratio_rejects_out_of_range() {
        assert!(ConfidenceLevel::from_ratio(0, 100).is_err());
        assert!(ConfidenceLevel::from_ratio(100, 100).is_err());
        assert!(ConfidenceLevel::from_ratio(101, 100).is_err());
        assert!(ConfidenceLevel::from_ratio(1, 0).is_err());
    }

    #[test]
    fn test_parse_decimal_string() {
        let level: ConfidenceLevel = "0.95".parse().unwrap();
        assert_eq!(level, ConfidenceLevel::ninety_five());

        let level: ConfidenceLevel = "0.8".parse().unwrap();
        assert_eq!(level, ConfidenceLevel::from_ratio(4, 5).unwrap());

        // Non-terminating reductions stay exact too.
        let level: ConfidenceLevel = "0.999".parse().unwrap();
        assert_eq!(level, ConfidenceLevel::from_ratio(999, 1000).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "0.", "1.0", "0.9a", "95%", "-0.5", "0.0"] {
            assert!(
                bad.parse::<ConfidenceLevel>().is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfidenceLevel::ninety_five().to_string(), "95.0%");
        let level = ConfidenceLevel::from_ratio(4, 5).unwrap();
        assert_eq!(level.to_string(), "80.0%");
    }

    #[test]
    fn test_default_is_ninety_five() {
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::ninety_five());
    }
}
