//! Bootstrap resampling over hierarchical experiments.
//!
//! Resampling happens with replacement at every level of the hierarchy
//! independently, so each resample preserves the nested design shape and
//! the total sample count. The low-level methods on [`Experiment`] take an
//! injected random generator; the [`Bootstrap`] driver wraps them with
//! iteration counts, a confidence level, and an optional seed for
//! reproducible runs.

use crate::experiment::Experiment;
use hierbench_core::{math, Error, Result};
use hierbench_confidence::{confidence_slice, ConfRange, ConfidenceLevel};
use rand::prelude::*;
use tracing::debug;

/// Default resample count for confidence intervals.
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Default resample count for raw means, which feed plots and other
/// lower-precision consumers.
pub const FAST_RESAMPLES: usize = 1_000;

impl Experiment {
    /// Draw one resample of the full hierarchy.
    ///
    /// At each level, indices are drawn uniformly with replacement up to
    /// that level's own repetition count, then the draw recurses into the
    /// next level. The result always has `total_samples()` entries.
    pub fn bootstrap_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let mut sample = Vec::with_capacity(self.total_samples());
        let mut index = Vec::with_capacity(self.levels());
        self.resample_level(&mut index, rng, &mut sample);
        sample
    }

    fn resample_level<R: Rng + ?Sized>(
        &self,
        index: &mut Vec<usize>,
        rng: &mut R,
        sample: &mut Vec<f64>,
    ) {
        let depth = index.len();
        if depth == self.levels() {
            sample.push(self.value(index));
            return;
        }
        let count = self.level_counts()[depth];
        for _ in 0..count {
            index.push(rng.gen_range(0..count));
            self.resample_level(index, rng, sample);
            index.pop();
        }
    }

    /// Means of `iterations` independent resamples, sorted ascending.
    pub fn bootstrap_means<R: Rng + ?Sized>(&self, rng: &mut R, iterations: usize) -> Vec<f64> {
        let mut means: Vec<f64> = (0..iterations)
            .map(|_| math::mean(&self.bootstrap_sample(rng)))
            .collect();
        means.sort_unstable_by(f64::total_cmp);
        means
    }
}

/// Driver for bootstrap confidence estimation.
///
/// Bundles the resample count, the confidence level, and an optional seed.
/// With a seed set, repeated runs reproduce bit-identical resamples.
///
/// # Example
///
/// ```rust,ignore
/// let interval = Bootstrap::new()
///     .with_iterations(10_000)
///     .with_seed(42)
///     .confidence_interval(&experiment)?;
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap {
    iterations: Option<usize>,
    level: ConfidenceLevel,
    seed: Option<u64>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Create a driver at the default 95% level with entropy-derived
    /// seeding. Without an explicit iteration count, interval estimation
    /// runs [`DEFAULT_RESAMPLES`] resamples and raw means run
    /// [`FAST_RESAMPLES`].
    pub fn new() -> Self {
        Self {
            iterations: None,
            level: ConfidenceLevel::default(),
            seed: None,
        }
    }

    /// Set the number of resamples, for raw means and intervals alike.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "iteration count must be positive");
        self.iterations = Some(iterations);
        self
    }

    /// Set the confidence level.
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Sorted resample means for one experiment, [`FAST_RESAMPLES`] of them
    /// unless an iteration count was set.
    pub fn means(&self, experiment: &Experiment) -> Vec<f64> {
        let iterations = self.iterations.unwrap_or(FAST_RESAMPLES);
        debug!(
            iterations,
            samples = experiment.total_samples(),
            "drawing bootstrap means"
        );
        experiment.bootstrap_means(&mut self.rng(), iterations)
    }

    /// Confidence interval for the mean, via the ordered-slice estimator
    /// over the resample means.
    pub fn confidence_interval(&self, experiment: &Experiment) -> Result<ConfRange> {
        let iterations = self.iterations.unwrap_or(DEFAULT_RESAMPLES);
        debug!(
            iterations,
            samples = experiment.total_samples(),
            "drawing bootstrap means"
        );
        let means = experiment.bootstrap_means(&mut self.rng(), iterations);
        confidence_slice(&means, self.level)
    }

    /// Confidence interval for the ratio of two experiments' means.
    ///
    /// Each iteration resamples both experiments independently and takes
    /// the ratio of the resample means. A denominator mean of exactly zero
    /// contributes `+inf` rather than faulting, so a comparison against an
    /// all-zero baseline still produces a (degenerate) interval.
    pub fn quotient(&self, numerator: &Experiment, denominator: &Experiment) -> Result<ConfRange> {
        let iterations = self.iterations.unwrap_or(DEFAULT_RESAMPLES);
        debug!(iterations, "drawing bootstrap quotients");
        let mut rng = self.rng();
        let ratios: Vec<f64> = (0..iterations)
            .map(|_| {
                let num = math::mean(&numerator.bootstrap_sample(&mut rng));
                let den = math::mean(&denominator.bootstrap_sample(&mut rng));
                if den == 0.0 {
                    f64::INFINITY
                } else {
                    num / den
                }
            })
            .collect();
        confidence_slice(&ratios, self.level)
    }

    /// Confidence interval for the geometric mean of per-pair performance
    /// ratios across matched experiment pairs.
    ///
    /// Useful for summarizing a benchmark suite: each iteration resamples
    /// every pair, forms the ratio of resample means, and reduces the
    /// ratios to one geometric mean.
    pub fn geomean_quotient(
        &self,
        numerators: &[Experiment],
        denominators: &[Experiment],
    ) -> Result<ConfRange> {
        if numerators.len() != denominators.len() {
            return Err(Error::InvalidParameter(format!(
                "experiment lists must match: {} vs {}",
                numerators.len(),
                denominators.len()
            )));
        }
        if numerators.is_empty() {
            return Err(Error::EmptyInput("geomean_quotient"));
        }
        let iterations = self.iterations.unwrap_or(DEFAULT_RESAMPLES);
        debug!(
            iterations,
            pairs = numerators.len(),
            "drawing bootstrap geometric means"
        );
        let mut rng = self.rng();
        let geomeans: Vec<f64> = (0..iterations)
            .map(|_| {
                let ratios: Vec<f64> = numerators
                    .iter()
                    .zip(denominators)
                    .map(|(a, b)| {
                        math::mean(&a.bootstrap_sample(&mut rng))
                            / math::mean(&b.bootstrap_sample(&mut rng))
                    })
                    .collect();
                math::geometric_mean(&ratios)
            })
            .collect();
        confidence_slice(&geomeans, self.level)
    }
}
