//! Hierarchical measurement store with nested variance decomposition.
//!
//! Benchmark timings are rarely independent: iterations nest inside process
//! executions, which nest inside compilations. This crate stores such
//! measurements in their full nested shape and answers the questions the
//! rigorous-benchmarking methodology asks of them:
//!
//! - how much variance each level contributes ([`Experiment::biased_variance`],
//!   [`Experiment::unbiased_variance`]),
//! - how precise the grand mean is ([`Experiment::confidence95`] and the
//!   resampling-based [`Bootstrap`] driver),
//! - how many repetitions to run at each level for the money
//!   ([`Experiment::optimal_reps`]).
//!
//! # Example
//!
//! ```rust
//! use hierbench_data::{Bootstrap, Experiment};
//! use std::collections::HashMap;
//!
//! // Two executions of two iterations each, per three compilations.
//! let mut samples = HashMap::new();
//! samples.insert(vec![0, 0], vec![9.0, 5.0]);
//! samples.insert(vec![0, 1], vec![8.0, 3.0]);
//! samples.insert(vec![1, 0], vec![10.0, 6.0]);
//! samples.insert(vec![1, 1], vec![7.0, 11.0]);
//! samples.insert(vec![2, 0], vec![1.0, 12.0]);
//! samples.insert(vec![2, 1], vec![2.0, 4.0]);
//!
//! let experiment = Experiment::new(samples, vec![3, 2, 2]).unwrap();
//! assert_eq!(experiment.mean(&[]).unwrap(), 6.5);
//!
//! let interval = Bootstrap::new()
//!     .with_iterations(1000)
//!     .with_seed(42)
//!     .confidence_interval(&experiment)
//!     .unwrap();
//! assert!(interval.contains(experiment.mean(&[]).unwrap()));
//! ```

mod bootstrap;
mod experiment;

pub use bootstrap::{Bootstrap, DEFAULT_RESAMPLES, FAST_RESAMPLES};
pub use experiment::Experiment;

// Re-exported so downstream callers can configure the bootstrap driver
// without naming the confidence crate directly.
pub use hierbench_confidence::{ConfRange, ConfidenceLevel};
