//! Confidence estimation over ordered scalar estimates.
//!
//! This crate provides the interval machinery used by the hierarchical
//! measurement store:
//!
//! - **Exact-rational interval splitting**: truncation indices for a central
//!   confidence slice, computed with integer arithmetic so boundaries never
//!   drift (a floating 0.025 × 1000 famously lands on the wrong index).
//! - **Ordered-slice estimation**: a confidence range over any list of
//!   scalar estimates, however they were produced.
//! - **Student-t quantiles**: the 95% quantile table consumed by the
//!   parametric interval.
//!
//! # Example
//!
//! ```rust
//! use hierbench_confidence::{confidence_slice, ConfidenceLevel};
//!
//! let estimates: Vec<f64> = (0..1000).map(|x| x as f64).collect();
//! let range = confidence_slice(&estimates, ConfidenceLevel::default()).unwrap();
//! assert_eq!(range.lower, 25.0);
//! assert_eq!(range.upper, 974.0);
//! assert_eq!(range.median, 499.5);
//! ```

mod level;
mod slice;
mod student_t;

pub use level::ConfidenceLevel;
pub use slice::{confidence_slice, confidence_slice_indices, CenterIndices, ConfRange, SliceIndices};
pub use student_t::quantile95;
