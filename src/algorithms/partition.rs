//! Exact weighted one-dimensional K-clustering.
//!
//! ## Purpose
//!
//! This module partitions a set of weighted points on the real line into at
//! most K clusters, minimizing the weighted within-cluster sum of squared
//! deviations. In this crate the points are per-level mean residuals and the
//! weights are level sample shares.
//!
//! ## Design notes
//!
//! * **Ordered partitions**: In 1-D an optimal clustering is always a set of
//!   contiguous runs of the sorted points, so the search space is the
//!   placement of K-1 cut points. This is what makes an exact dynamic
//!   program possible.
//! * **Recurrence**: With `D[k][j]` the cheapest cost of the first `j` sorted
//!   points using at most `k` clusters, `D[k][0] = 0`,
//!   `D[1][j] = SSE(0..j)` and `D[k][j] = min_{s<j} D[k-1][s] + SSE(s..j)`.
//! * **Segment costs** come from [`WeightedPrefixSums`] in O(1).
//! * **Divide and conquer**: The leftmost optimal split point is monotone in
//!   `j` because the SSE cost satisfies the quadrangle inequality, so each DP
//!   row can be filled in O(n log n) instead of O(n^2). This is the
//!   divide-and-conquer bound; a SMAWK row fill would reach O(n) per row and
//!   is not implemented.
//! * **Conditioning**: Segment costs are taken on means centred at their
//!   median, so a large common offset does not erase within-cluster spread.
//!
//! ## Invariants
//!
//! * Cluster ids run from 1 to the number of clusters used, in increasing
//!   order of cluster mean.
//! * Every cluster is a contiguous run of the sorted means.
//! * Among equal-cost candidates the leftmost split point wins, so identical
//!   inputs always yield identical partitions.
//! * K is clamped to the number of distinct means.
//!
//! ## Non-goals
//!
//! * This module does not choose K.
//! * This module does not cluster in more than one dimension.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::math::moments::WeightedPrefixSums;
use crate::primitives::errors::CatClustError;

// ============================================================================
// Configuration
// ============================================================================

/// How each row of the dynamic program is filled.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// Scan every split point for every prefix: O(n^2 K).
    Exhaustive,

    /// Exploit split-point monotonicity by divide and conquer over each row:
    /// O(n K log n). Not the O(n K) SMAWK bound.
    #[default]
    DivideAndConquer,
}

// ============================================================================
// Output
// ============================================================================

/// Optimal ordered partition of weighted points.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPartition<T> {
    /// Cluster id (1-based) of each point, in input order.
    pub assignments: Vec<usize>,

    /// Weighted mean of each cluster, indexed by `id - 1`.
    pub cluster_means: Vec<T>,

    /// Total weight of each cluster, indexed by `id - 1`.
    pub cluster_weights: Vec<T>,

    /// Achieved weighted within-cluster sum of squares.
    pub objective: T,

    /// K after clamping to the number of distinct means.
    pub clusters_effective: usize,
}

impl<T> WeightedPartition<T> {
    /// Number of clusters actually used.
    #[inline]
    pub fn clusters_used(&self) -> usize {
        self.cluster_means.len()
    }
}

// ============================================================================
// Partitioner
// ============================================================================

/// Dynamic-programming solver for weighted 1-D K-clustering.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPartitioner {
    strategy: PartitionStrategy,
}

impl OptimalPartitioner {
    /// Create a partitioner using `strategy`.
    pub fn new(strategy: PartitionStrategy) -> Self {
        Self { strategy }
    }

    /// Configured strategy.
    pub fn strategy(&self) -> PartitionStrategy {
        self.strategy
    }

    /// Partition `means` (any order) weighted by `weights` into at most `k`
    /// contiguous clusters.
    pub fn partition<T: Float>(
        &self,
        means: &[T],
        weights: &[T],
        k: usize,
    ) -> Result<WeightedPartition<T>, CatClustError> {
        validate(means, weights, k)?;
        let n = means.len();

        // Stable sort: equal means keep their input order.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| means[a].partial_cmp(&means[b]).unwrap_or(Ordering::Equal));
        let sorted_means: Vec<T> = order.iter().map(|&i| means[i]).collect();
        let sorted_weights: Vec<T> = order.iter().map(|&i| weights[i]).collect();

        let distinct = 1 + sorted_means.windows(2).filter(|w| w[0] != w[1]).count();
        let k_eff = k.min(distinct);
        if k_eff < k {
            log::warn!("requested {k} clusters but only {distinct} distinct means; clamping");
        }

        let prefix = WeightedPrefixSums::new(&sorted_means, &sorted_weights);
        let sweep = self.sweep(&prefix, k_eff);
        let runs = reconstruct_runs(&sweep.backpointers, n);

        let mut assignments = vec![0usize; n];
        let mut cluster_means = Vec::with_capacity(runs.len());
        let mut cluster_weights = Vec::with_capacity(runs.len());
        for (idx, &(start, end)) in runs.iter().enumerate() {
            for &original in &order[start..end] {
                assignments[original] = idx + 1;
            }
            let mean = prefix
                .mean(start, end)
                .unwrap_or_else(|| unweighted_mean(&sorted_means[start..end]));
            cluster_means.push(mean);
            cluster_weights.push(prefix.weight(start, end));
        }

        log::debug!(
            "partitioned {n} points into {} clusters (k={k}, objective={:?})",
            runs.len(),
            sweep.objective.to_f64()
        );

        Ok(WeightedPartition {
            assignments,
            cluster_means,
            cluster_weights,
            objective: sweep.objective,
            clusters_effective: k_eff,
        })
    }

    fn sweep<T: Float>(&self, prefix: &WeightedPrefixSums<T>, k: usize) -> DpSweep<T> {
        let n = prefix.len();

        // Row k = 1: a single cluster over every prefix.
        let mut prev: Vec<T> = (0..=n).map(|j| prefix.sse(0, j)).collect();
        let mut backpointers = Vec::with_capacity(k);
        backpointers.push(vec![0usize; n + 1]);

        for _ in 2..=k {
            let mut curr = vec![T::zero(); n + 1];
            let mut back = vec![0usize; n + 1];
            match self.strategy {
                PartitionStrategy::Exhaustive => {
                    fill_row_exhaustive(prefix, &prev, &mut curr, &mut back)
                }
                PartitionStrategy::DivideAndConquer => {
                    fill_row_divide(prefix, &prev, &mut curr, &mut back, 1, n, 0, n - 1)
                }
            }
            backpointers.push(back);
            prev = curr;
        }

        DpSweep {
            objective: prev[n],
            backpointers,
        }
    }
}

// ============================================================================
// Dynamic Program
// ============================================================================

#[derive(Debug, Clone)]
struct DpSweep<T> {
    objective: T,
    /// `backpointers[k-1][j]`: start of the last cluster in the best
    /// at-most-k partition of the first `j` points.
    backpointers: Vec<Vec<usize>>,
}

/// Best split for prefix `j` over candidates `lo..=hi`, leftmost on ties.
#[inline]
fn best_split<T: Float>(
    prefix: &WeightedPrefixSums<T>,
    prev: &[T],
    j: usize,
    lo: usize,
    hi: usize,
) -> (T, usize) {
    let mut best = T::infinity();
    let mut arg = lo;
    for s in lo..=hi {
        let cost = prev[s] + prefix.sse(s, j);
        if cost < best {
            best = cost;
            arg = s;
        }
    }
    (best, arg)
}

fn fill_row_exhaustive<T: Float>(
    prefix: &WeightedPrefixSums<T>,
    prev: &[T],
    curr: &mut [T],
    back: &mut [usize],
) {
    for j in 1..curr.len() {
        let (cost, split) = best_split(prefix, prev, j, 0, j - 1);
        curr[j] = cost;
        back[j] = split;
    }
}

#[allow(clippy::too_many_arguments)]
fn fill_row_divide<T: Float>(
    prefix: &WeightedPrefixSums<T>,
    prev: &[T],
    curr: &mut [T],
    back: &mut [usize],
    j_lo: usize,
    j_hi: usize,
    s_lo: usize,
    s_hi: usize,
) {
    if j_lo > j_hi {
        return;
    }
    let j = j_lo + (j_hi - j_lo) / 2;
    let (cost, split) = best_split(prefix, prev, j, s_lo, s_hi.min(j - 1));
    curr[j] = cost;
    back[j] = split;

    if j > j_lo {
        fill_row_divide(prefix, prev, curr, back, j_lo, j - 1, s_lo, split);
    }
    fill_row_divide(prefix, prev, curr, back, j + 1, j_hi, split, s_hi);
}

/// Walk backpointers from the full prefix to recover `(start, end)` runs in
/// ascending order.
fn reconstruct_runs(backpointers: &[Vec<usize>], n: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::with_capacity(backpointers.len());
    let mut end = n;
    let mut level = backpointers.len();
    while end > 0 && level > 0 {
        let start = backpointers[level - 1][end];
        runs.push((start, end));
        end = start;
        level -= 1;
    }
    runs.reverse();
    runs
}

// ============================================================================
// Helpers
// ============================================================================

fn validate<T: Float>(means: &[T], weights: &[T], k: usize) -> Result<(), CatClustError> {
    if means.is_empty() || weights.is_empty() {
        return Err(CatClustError::EmptyInput);
    }
    if means.len() != weights.len() {
        return Err(CatClustError::MismatchedInputs {
            x_len: means.len(),
            y_len: weights.len(),
            dimensions: 1,
        });
    }
    if k < 1 {
        return Err(CatClustError::InvalidClusters { got: k, min: 1 });
    }
    for (i, &m) in means.iter().enumerate() {
        if !m.is_finite() {
            return Err(CatClustError::InvalidNumericValue(format!(
                "means[{}]={}",
                i,
                m.to_f64().unwrap_or(f64::NAN)
            )));
        }
    }
    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() {
            return Err(CatClustError::InvalidNumericValue(format!(
                "weights[{}]={}",
                i,
                w.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if w < T::zero() {
            return Err(CatClustError::InvalidWeight { index: i });
        }
    }
    Ok(())
}

fn unweighted_mean<T: Float>(values: &[T]) -> T {
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}
