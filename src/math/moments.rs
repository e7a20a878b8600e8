//! Weighted prefix moments for constant-time segment costs.
//!
//! ## Purpose
//!
//! The partitioner evaluates the weighted sum of squared deviations of many
//! contiguous runs of sorted points. Prefix sums of `w`, `w*m` and `w*m^2`
//! answer each such query in O(1) after an O(n) pass.
//!
//! ## Key concepts
//!
//! * **Segment cost**: `SSE(a..b) = S2 - S1^2 / W` over points `a..b`
//!   (half-open), where `W`, `S1`, `S2` are the weight, first and second
//!   weighted moments of the run.
//! * **Centering**: Moments are taken of `m - c`, with `c` the middle value
//!   of the input. SSE does not depend on `c`, but without it a common
//!   offset (say 1e8) puts `w*m^2` near 1e16 and swamps within-run spread.
//!
//! ## Invariants
//!
//! * Costs are never negative; cancellation noise is clamped at zero.
//! * A run with zero total weight costs zero.
//! * `mean` reports values on the original scale.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Cumulative weighted moments over an ordered sequence of points.
#[derive(Debug, Clone)]
pub struct WeightedPrefixSums<T> {
    center: T,
    weight: Vec<T>,
    first: Vec<T>,
    second: Vec<T>,
}

impl<T: Float> WeightedPrefixSums<T> {
    /// Accumulate moments of `values` weighted by `weights` (same order).
    ///
    /// For sorted `values` the centre is the median.
    pub fn new(values: &[T], weights: &[T]) -> Self {
        debug_assert_eq!(values.len(), weights.len());
        let n = values.len();
        let center = values.get(n / 2).copied().unwrap_or_else(T::zero);
        let mut weight = Vec::with_capacity(n + 1);
        let mut first = Vec::with_capacity(n + 1);
        let mut second = Vec::with_capacity(n + 1);
        weight.push(T::zero());
        first.push(T::zero());
        second.push(T::zero());

        for (i, (&v, &w)) in values.iter().zip(weights.iter()).enumerate() {
            let m = v - center;
            weight.push(weight[i] + w);
            first.push(first[i] + w * m);
            second.push(second[i] + w * m * m);
        }

        Self {
            center,
            weight,
            first,
            second,
        }
    }

    /// Number of points covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.weight.len() - 1
    }

    /// Whether no points are covered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total weight of points `start..end`.
    #[inline]
    pub fn weight(&self, start: usize, end: usize) -> T {
        self.weight[end] - self.weight[start]
    }

    /// Weighted mean of points `start..end`, or `None` for zero total weight.
    #[inline]
    pub fn mean(&self, start: usize, end: usize) -> Option<T> {
        let w = self.weight(start, end);
        if w > T::zero() {
            Some(self.center + (self.first[end] - self.first[start]) / w)
        } else {
            None
        }
    }

    /// Weighted sum of squared deviations of points `start..end` from their
    /// weighted mean.
    #[inline]
    pub fn sse(&self, start: usize, end: usize) -> T {
        let w = self.weight(start, end);
        if w <= T::zero() {
            return T::zero();
        }
        let s1 = self.first[end] - self.first[start];
        let s2 = self.second[end] - self.second[start];
        (s2 - s1 * s1 / w).max(T::zero())
    }
}
