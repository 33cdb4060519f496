//! Central confidence slices over ordered scalar estimates.
//!
//! The splitter computes which indices of a sorted sample survive a central
//! confidence truncation; the estimator applies it to an arbitrary list of
//! scalar estimates (bootstrap means, ratios) without caring how they were
//! produced.

use crate::level::ConfidenceLevel;
use hierbench_core::{math, Error, Result};
use num_rational::Ratio;

/// Position(s) of the median in a sorted sample.
///
/// Even-length samples have two central elements; odd-length samples one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterIndices {
    Single(usize),
    Pair(usize, usize),
}

impl CenterIndices {
    fn of(length: usize) -> Self {
        if length % 2 == 0 {
            Self::Pair(length / 2 - 1, length / 2)
        } else {
            Self::Single(length / 2)
        }
    }

    /// Mean of the elements at these positions in `sorted`.
    fn median_of(&self, sorted: &[f64]) -> f64 {
        match *self {
            Self::Single(i) => sorted[i],
            Self::Pair(i, j) => math::mean(&[sorted[i], sorted[j]]),
        }
    }
}

/// Truncation indices for a central confidence slice of a sorted sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    /// First retained index.
    pub lower: usize,
    /// Median position(s).
    pub center: CenterIndices,
    /// One past the last retained index.
    pub upper: usize,
}

/// Compute the truncation indices so that `sorted[lower..upper]` holds the
/// requested fraction of the sample.
///
/// The excluded tail mass `(1 - level) / 2` is computed in exact rational
/// arithmetic; the lower bound rounds down and the upper bound rounds up, so
/// the retained slice never loses coverage to floating-point drift.
pub fn confidence_slice_indices(length: usize, level: ConfidenceLevel) -> Result<SliceIndices> {
    if length == 0 {
        return Err(Error::EmptyInput("confidence_slice_indices"));
    }
    let exclude = (Ratio::from_integer(1u64) - level.ratio()) / Ratio::from_integer(2u64);
    let length_ratio = Ratio::from_integer(length as u64);

    let lower = (exclude * length_ratio).floor().to_integer() as usize;
    let upper = ((Ratio::from_integer(1u64) - exclude) * length_ratio)
        .ceil()
        .to_integer() as usize;

    Ok(SliceIndices {
        lower,
        center: CenterIndices::of(length),
        upper,
    })
}

/// A central confidence slice over a set of scalar estimates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfRange {
    /// Lower bound of the interval.
    pub lower: f64,
    /// Median of the estimates.
    pub median: f64,
    /// Upper bound of the interval.
    pub upper: f64,
}

impl ConfRange {
    /// Mean of the two half-widths.
    pub fn error(&self) -> f64 {
        math::mean(&[self.median - self.lower, self.upper - self.median])
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check whether a value falls inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Estimate a confidence interval by slicing the ordered estimates.
///
/// Sorts `values` ascending and keeps the central `level` fraction. The
/// estimates need not be sorted on entry and may have been produced by any
/// resampling scheme. A single estimate yields a degenerate zero-width
/// range; callers wanting a tight interval should supply many estimates.
pub fn confidence_slice(values: &[f64], level: ConfidenceLevel) -> Result<ConfRange> {
    if values.is_empty() {
        return Err(Error::EmptyInput("confidence_slice"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let indices = confidence_slice_indices(sorted.len(), level)?;
    Ok(ConfRange {
        lower: sorted[indices.lower],
        median: indices.center.median_of(&sorted),
        // upper is exclusive
        upper: sorted[indices.upper - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn level(s: &str) -> ConfidenceLevel {
        s.parse().unwrap()
    }

    #[test]
    fn test_slice_indices_default_level() {
        let got = confidence_slice_indices(1000, ConfidenceLevel::default()).unwrap();
        assert_eq!(
            got,
            SliceIndices {
                lower: 25,
                center: CenterIndices::Pair(499, 500),
                upper: 975,
            }
        );
    }

    #[test]
    fn test_slice_indices_eighty_percent() {
        let got = confidence_slice_indices(10, level("0.8")).unwrap();
        assert_eq!(
            got,
            SliceIndices {
                lower: 1,
                center: CenterIndices::Pair(4, 5),
                upper: 9,
            }
        );

        let got = confidence_slice_indices(11, level("0.8")).unwrap();
        assert_eq!(
            got,
            SliceIndices {
                lower: 1,
                center: CenterIndices::Single(5),
                upper: 10,
            }
        );
    }

    #[test]
    fn test_slice_indices_empty_input() {
        assert!(matches!(
            confidence_slice_indices(0, ConfidenceLevel::default()),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_confidence_slice_shifted_range() {
        // 0..999 shifted by +15, already sorted.
        let means: Vec<f64> = (0..1000).map(|x| (x + 15) as f64).collect();

        let range = confidence_slice(&means, ConfidenceLevel::default()).unwrap();
        assert_eq!(range.lower, 40.0); // 25 + 15
        assert_eq!(range.upper, 989.0); // 974 + 15
        assert_eq!(range.median, 514.5);
        assert_relative_eq!(
            range.error(),
            math::mean(&[514.5 - 40.0, 989.0 - 514.5]),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_confidence_slice_unsorted_input() {
        let mut means: Vec<f64> = (0..1000).map(|x| (x + 15) as f64).collect();
        means.reverse();
        let range = confidence_slice(&means, ConfidenceLevel::default()).unwrap();
        assert_eq!(range.lower, 40.0);
        assert_eq!(range.upper, 989.0);
    }

    #[test]
    fn test_confidence_slice_explicit_level() {
        let means: Vec<f64> = (0..10).map(|x| x as f64).collect();
        let range = confidence_slice(&means, level("0.8")).unwrap();
        assert_eq!(range.lower, 1.0);
        assert_eq!(range.median, 4.5);
        assert_eq!(range.upper, 8.0);

        let means: Vec<f64> = (0..11).map(|x| x as f64).collect();
        let range = confidence_slice(&means, level("0.8")).unwrap();
        assert_eq!(range.lower, 1.0);
        assert_eq!(range.median, 5.0);
        assert_eq!(range.upper, 9.0);
    }

    #[test]
    fn test_confidence_slice_single_value_degenerates() {
        let range = confidence_slice(&[3.5], ConfidenceLevel::default()).unwrap();
        assert_eq!(range.lower, 3.5);
        assert_eq!(range.median, 3.5);
        assert_eq!(range.upper, 3.5);
        assert_eq!(range.error(), 0.0);
        assert_eq!(range.width(), 0.0);
    }

    #[test]
    fn test_confidence_slice_empty_input() {
        assert!(matches!(
            confidence_slice(&[], ConfidenceLevel::default()),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_conf_range_helpers() {
        let range = ConfRange {
            lower: 2.0,
            median: 5.0,
            upper: 8.0,
        };
        assert_eq!(range.width(), 6.0);
        assert_eq!(range.error(), 3.0);
        assert!(range.contains(5.0));
        assert!(!range.contains(1.0));
        assert!(!range.contains(9.0));
    }
}
