//! Error types for hierarchical benchmark statistics
//!
//! Provides a unified error type for all hierbench crates.

use thiserror::Error;

/// Core error type for hierarchical measurement operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required index tuple is missing or a leaf sequence has the wrong
    /// length. Raised at construction time; the store is never usable after
    /// this fires.
    #[error("incomplete dataset at index {index:?}: {reason}")]
    IncompleteDataset { index: Vec<usize>, reason: String },

    /// A 1-based level argument fell outside the valid range.
    #[error("invalid level {level}: expected a level in [1, {max}]")]
    InvalidLevel { level: usize, max: usize },

    /// A confidence level was not exactly representable or fell outside
    /// the open interval (0, 1).
    #[error("invalid confidence level: {0}")]
    InvalidConfidenceLevel(String),

    /// An estimator was handed a zero-length sequence.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A variance component required to be positive was zero or negative.
    #[error("degenerate variance component at level {level}: {value}")]
    DegenerateVariance { level: usize, value: f64 },

    /// Invalid parameter provided to a function. Always a caller bug.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a missing leaf sequence
    pub fn missing_leaf(index: &[usize]) -> Self {
        Self::IncompleteDataset {
            index: index.to_vec(),
            reason: "no leaf sequence recorded".to_string(),
        }
    }

    /// Create an error for a leaf sequence of the wrong length
    pub fn leaf_length(index: &[usize], expected: usize, actual: usize) -> Self {
        Self::IncompleteDataset {
            index: index.to_vec(),
            reason: format!("leaf has {actual} measurements, expected {expected}"),
        }
    }

    /// Create an error for a level argument out of range
    pub fn invalid_level(level: usize, max: usize) -> Self {
        Self::InvalidLevel { level, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_leaf(&[1, 0]);
        assert_eq!(
            err.to_string(),
            "incomplete dataset at index [1, 0]: no leaf sequence recorded"
        );

        let err = Error::leaf_length(&[0, 2], 5, 3);
        assert_eq!(
            err.to_string(),
            "incomplete dataset at index [0, 2]: leaf has 3 measurements, expected 5"
        );

        let err = Error::invalid_level(4, 3);
        assert_eq!(err.to_string(), "invalid level 4: expected a level in [1, 3]");

        let err = Error::InvalidConfidenceLevel("not a decimal: 'x'".to_string());
        assert_eq!(err.to_string(), "invalid confidence level: not a decimal: 'x'");

        let err = Error::EmptyInput("confidence_slice");
        assert_eq!(err.to_string(), "empty input: confidence_slice");

        let err = Error::DegenerateVariance { level: 2, value: -5.7 };
        assert_eq!(
            err.to_string(),
            "degenerate variance component at level 2: -5.7"
        );

        let err = Error::InvalidParameter("costs must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: costs must be positive");
    }

    #[test]
    fn test_result_type_alias() {
        fn check_level(level: usize, max: usize) -> Result<usize> {
            if level == 0 || level > max {
                return Err(Error::invalid_level(level, max));
            }
            Ok(max - level)
        }

        assert_eq!(check_level(1, 3).unwrap(), 2);
        assert!(check_level(0, 3).is_err());
        assert!(check_level(4, 3).is_err());
    }
}
