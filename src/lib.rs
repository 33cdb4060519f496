//! Variance decomposition and confidence intervals for hierarchical
//! benchmark measurements.
//!
//! Rigorous benchmarking repeats measurements across a nested hierarchy of
//! experimental levels (compilation, process execution, in-process
//! iteration) and needs statistics that respect that nesting. This crate
//! bundles the pieces:
//!
//! - [`Experiment`] stores the nested measurements and decomposes their
//!   variance into per-level components (nested ANOVA).
//! - [`Experiment::confidence95`] gives the parametric Student-t interval
//!   for the grand mean; [`Bootstrap`] gives resampling-based intervals,
//!   including ratio intervals for comparing two systems.
//! - [`Experiment::optimal_reps`] recommends cost-optimal repetition counts
//!   per level (Neyman allocation).
//! - [`confidence_slice`] estimates an interval over any list of scalar
//!   estimates, with exact-rational truncation boundaries.
//!
//! # Example
//!
//! ```rust
//! use hierbench::{Bootstrap, Experiment};
//! use std::collections::HashMap;
//!
//! // Three process executions, four iterations each.
//! let mut samples = HashMap::new();
//! samples.insert(vec![0], vec![9.0, 5.0, 8.0, 3.0]);
//! samples.insert(vec![1], vec![10.0, 6.0, 7.0, 11.0]);
//! samples.insert(vec![2], vec![1.0, 12.0, 2.0, 4.0]);
//! let experiment = Experiment::new(samples, vec![3, 4]).unwrap();
//!
//! assert_eq!(experiment.mean(&[]).unwrap(), 6.5);
//! let half_width = experiment.confidence95().unwrap();
//! assert!(half_width > 0.0);
//!
//! let interval = Bootstrap::new()
//!     .with_iterations(1000)
//!     .with_seed(42)
//!     .confidence_interval(&experiment)
//!     .unwrap();
//! assert!(interval.lower <= interval.median && interval.median <= interval.upper);
//! ```

pub use hierbench_confidence::{
    confidence_slice, confidence_slice_indices, quantile95, CenterIndices, ConfRange,
    ConfidenceLevel, SliceIndices,
};
pub use hierbench_core::{
    math::{geometric_mean, mean, neumaier_sum},
    Error, Result,
};
pub use hierbench_data::{Bootstrap, Experiment, DEFAULT_RESAMPLES, FAST_RESAMPLES};
