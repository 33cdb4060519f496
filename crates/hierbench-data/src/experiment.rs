//! The hierarchical measurement store.
//!
//! An [`Experiment`] holds measurements collected across a nested hierarchy
//! of experimental levels (say compilation, then process execution, then
//! in-process iteration) and exposes the nested-ANOVA machinery over them:
//! means at any aggregation level, per-level variance components, the
//! parametric confidence interval, and cost-optimal repetition planning.
//!
//! Levels appear in two different orders and it pays to keep them straight:
//!
//! - `level_counts` is stored **outermost-first**, e.g. `[compiles,
//!   executions, iterations]`.
//! - Public operations take the **mathematical level index** `i`: 1-based,
//!   counted from the innermost level outward. The storage index of level
//!   `i` is `n - i`.

use hierbench_core::{math, Error, Result};
use hierbench_confidence::quantile95;
use std::cell::RefCell;
use std::collections::HashMap;

/// Structural memoization key: operation tag plus arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Mean(Vec<usize>),
    BiasedVariance(usize),
    UnbiasedVariance(usize),
}

/// Every index tuple over the given counts, in lexicographic order.
pub(crate) fn index_tuples(counts: &[usize]) -> Vec<Vec<usize>> {
    let mut tuples = vec![Vec::new()];
    for &count in counts {
        let mut next = Vec::with_capacity(tuples.len() * count);
        for prefix in &tuples {
            for value in 0..count {
                let mut tuple = prefix.clone();
                tuple.push(value);
                next.push(tuple);
            }
        }
        tuples = next;
    }
    tuples
}

/// Measurements from one nested benchmarking experiment.
///
/// Immutable after construction; every derived quantity is a pure function
/// of the stored samples and is memoized behind a private cache. The cache
/// is `RefCell`-based, which deliberately keeps the type `!Sync`: workers
/// that want to share a store across threads must clone it or synchronize
/// externally.
#[derive(Debug, Clone)]
pub struct Experiment {
    /// Leaf sequences keyed by all-but-innermost index tuples.
    samples: HashMap<Vec<usize>, Vec<f64>>,
    /// Repetition count per level, outermost-first.
    level_counts: Vec<usize>,
    cache: RefCell<HashMap<CacheKey, f64>>,
}

impl Experiment {
    /// Build a store from leaf sequences and per-level repetition counts.
    ///
    /// `samples` maps each index tuple over the outer `n - 1` levels to the
    /// sequence of innermost-level measurements taken under it. The design
    /// must be fully populated: every reachable tuple present, every leaf
    /// sequence of length `level_counts[n - 1]`. Anything less is
    /// [`Error::IncompleteDataset`].
    pub fn new(samples: HashMap<Vec<usize>, Vec<f64>>, level_counts: Vec<usize>) -> Result<Self> {
        if level_counts.is_empty() {
            return Err(Error::InvalidParameter(
                "level_counts must name at least one level".to_string(),
            ));
        }
        if level_counts.iter().any(|&count| count == 0) {
            return Err(Error::InvalidParameter(
                "every level count must be positive".to_string(),
            ));
        }

        let (outer, innermost) = level_counts.split_at(level_counts.len() - 1);
        let leaf_len = innermost[0];
        for index in index_tuples(outer) {
            match samples.get(&index) {
                None => return Err(Error::missing_leaf(&index)),
                Some(leaf) if leaf.len() != leaf_len => {
                    return Err(Error::leaf_length(&index, leaf_len, leaf.len()))
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            samples,
            level_counts,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// The number of levels in the experiment.
    pub fn levels(&self) -> usize {
        self.level_counts.len()
    }

    /// Repetition counts per level, outermost-first.
    pub fn level_counts(&self) -> &[usize] {
        &self.level_counts
    }

    /// Total number of leaf measurements.
    pub fn total_samples(&self) -> usize {
        self.level_counts.iter().product()
    }

    /// The number of repetitions at mathematical level `i`.
    pub fn repetitions(&self, i: usize) -> Result<usize> {
        let n = self.levels();
        if i == 0 || i > n {
            return Err(Error::invalid_level(i, n));
        }
        Ok(self.level_counts[n - i])
    }

    /// The measurement at a full-length index tuple.
    pub(crate) fn value(&self, index: &[usize]) -> f64 {
        debug_assert_eq!(index.len(), self.levels());
        let (outer, leaf) = index.split_at(index.len() - 1);
        self.samples[outer][leaf[0]]
    }

    fn cached(&self, key: CacheKey, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(&hit) = self.cache.borrow().get(&key) {
            return hit;
        }
        let value = compute();
        self.cache.borrow_mut().insert(key, value);
        value
    }

    /// Mean over every sample whose index starts with `fixed`.
    ///
    /// `fixed` pins the outermost coordinates; the remaining coordinates
    /// range over all valid values. An empty `fixed` yields the grand mean
    /// over every leaf measurement. Summation is compensated, so the result
    /// does not drift with the enumeration order of possibly thousands of
    /// terms.
    pub fn mean(&self, fixed: &[usize]) -> Result<f64> {
        let n = self.levels();
        if fixed.len() > n {
            return Err(Error::InvalidParameter(format!(
                "index tuple {fixed:?} is longer than the {n} levels"
            )));
        }
        for (k, (&coordinate, &count)) in fixed.iter().zip(&self.level_counts).enumerate() {
            if coordinate >= count {
                return Err(Error::InvalidParameter(format!(
                    "coordinate {coordinate} at level {k} exceeds its count {count}"
                )));
            }
        }
        Ok(self.mean_unchecked(fixed))
    }

    pub(crate) fn mean_unchecked(&self, fixed: &[usize]) -> f64 {
        self.cached(CacheKey::Mean(fixed.to_vec()), || {
            let remaining = &self.level_counts[fixed.len()..];
            let mut alldata = Vec::with_capacity(remaining.iter().product::<usize>().max(1));
            let mut index = fixed.to_vec();
            for rest in index_tuples(remaining) {
                index.truncate(fixed.len());
                index.extend_from_slice(&rest);
                alldata.push(self.value(&index));
            }
            math::mean(&alldata)
        })
    }

    /// The biased per-level variance estimator S²ᵢ.
    ///
    /// The classical nested-ANOVA mean square at level `i`, normalized to
    /// the scale of a single observation: the squared deviations of each
    /// level-`i` mean from its parent mean, scaled by the inverse product of
    /// the outer repetition counts and by `1 / (rᵢ - 1)`.
    ///
    /// A level with a single repetition has zero degrees of freedom, so its
    /// estimator is undefined and fails with [`Error::DegenerateVariance`].
    pub fn biased_variance(&self, i: usize) -> Result<f64> {
        let n = self.levels();
        if i == 0 || i > n {
            return Err(Error::invalid_level(i, n));
        }
        if self.level_counts[n - i] < 2 {
            return Err(Error::DegenerateVariance {
                level: i,
                value: f64::NAN,
            });
        }
        Ok(self.cached(CacheKey::BiasedVariance(i), || {
            let depth = n - i;

            // 1 / (a * b) == (1 / a) / b, so the factor can be accumulated
            // by repeated division.
            let mut factor = 1.0;
            for &count in &self.level_counts[..depth] {
                factor /= count as f64;
            }
            factor /= (self.level_counts[depth] - 1) as f64;

            let mut sum = 0.0;
            for index in index_tuples(&self.level_counts[..depth + 1]) {
                let own = self.mean_unchecked(&index);
                let parent = self.mean_unchecked(&index[..index.len() - 1]);
                sum += (own - parent) * (own - parent);
            }
            factor * sum
        }))
    }

    /// The unbiased per-level variance estimator T²ᵢ.
    ///
    /// Subtracts the variance inherited from the level below:
    /// `T²₁ = S²₁` and `T²ᵢ = S²ᵢ - S²ᵢ₋₁ / rᵢ₋₁` for `i > 1`. The
    /// correction recurses on the *biased* estimator; the published version
    /// that recursed on T² itself was wrong and has been corrected.
    ///
    /// Sampling noise can legitimately drive the result negative; callers
    /// must tolerate that rather than treat it as an error.
    pub fn unbiased_variance(&self, i: usize) -> Result<f64> {
        let n = self.levels();
        if i == 0 || i > n {
            return Err(Error::invalid_level(i, n));
        }
        if i == 1 {
            return self.biased_variance(1);
        }
        let biased = self.biased_variance(i)?;
        let below = self.biased_variance(i - 1)?;
        let reps_below = self.repetitions(i - 1)? as f64;
        Ok(self.cached(CacheKey::UnbiasedVariance(i), || {
            biased - below / reps_below
        }))
    }

    /// The half-width of the parametric 95% confidence interval for the
    /// grand mean.
    ///
    /// Uses `r_outermost - 1` degrees of freedom, so the outermost level
    /// should be the one with the fewest repetitions.
    pub fn confidence95(&self) -> Result<f64> {
        let n = self.levels();
        let outermost = self.level_counts[0];
        let quantile = quantile95(outermost - 1);
        Ok(quantile * (self.biased_variance(n)? / outermost as f64).sqrt())
    }

    /// Cost-optimal repetition count for level `i` relative to level `i + 1`,
    /// rounded up to a whole number of repetitions.
    ///
    /// `costs` gives the cost of one repetition at each level,
    /// outermost-first. This is pairwise Neyman allocation:
    /// `sqrt((cost_{i+1} / cost_i) * T²ᵢ / T²ᵢ₊₁)`.
    pub fn optimal_reps(&self, i: usize, costs: &[f64]) -> Result<usize> {
        Ok(self.optimal_reps_exact(i, costs)?.ceil() as usize)
    }

    /// The exact (possibly fractional) optimal-repetition ratio, for
    /// diagnostic use.
    ///
    /// A zero or negative variance component makes the allocation ratio
    /// meaningless, so that case fails with [`Error::DegenerateVariance`]
    /// instead of surfacing a NaN.
    pub fn optimal_reps_exact(&self, i: usize, costs: &[f64]) -> Result<f64> {
        let n = self.levels();
        if i == 0 || i >= n {
            return Err(Error::invalid_level(i, n - 1));
        }
        if costs.len() != n {
            return Err(Error::InvalidParameter(format!(
                "expected one cost per level ({n}), got {}",
                costs.len()
            )));
        }
        if costs.iter().any(|&c| !(c > 0.0) || !c.is_finite()) {
            return Err(Error::InvalidParameter(
                "every cost must be positive and finite".to_string(),
            ));
        }

        let depth = n - i;
        let own = self.unbiased_variance(i)?;
        let next = self.unbiased_variance(i + 1)?;
        if next.is_nan() || next <= 0.0 {
            return Err(Error::DegenerateVariance {
                level: i + 1,
                value: next,
            });
        }
        let ratio = costs[depth - 1] / costs[depth] * own / next;
        if ratio.is_nan() || ratio < 0.0 {
            return Err(Error::DegenerateVariance { level: i, value: own });
        }
        Ok(ratio.sqrt())
    }
}
