//! Core error type and numerically-stable reductions for the hierbench
//! crates.
//!
//! Everything downstream (the confidence estimators, the hierarchical
//! measurement store, the bootstrap driver) reports failures through the
//! [`Error`] enum defined here and reduces floating-point sequences through
//! the compensated helpers in [`math`].

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{geometric_mean, mean, neumaier_sum};
