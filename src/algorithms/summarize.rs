//! Per-level conditional means and sample shares.
//!
//! ## Purpose
//!
//! This module collapses the residualized outcome to one row per distinct
//! category level: the level's mean residual, its sample share, and its raw
//! count.
//!
//! ## Invariants
//!
//! * Rows are sorted by label value ascending and keyed by distinct label.
//! * Shares sum to one (up to rounding).
//! * Singleton levels are valid: mean equals the single residual, share `1/n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

/// Summary of one category level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSummary<T> {
    /// Category label.
    pub value: T,

    /// Mean residualized outcome over observations with this label.
    pub mean: T,

    /// Fraction of observations with this label.
    pub share: T,

    /// Number of observations with this label.
    pub count: usize,
}

/// Groups residuals by category label.
pub struct LevelSummarizer;

impl LevelSummarizer {
    /// Summarize `residuals` by `labels` (same length, all finite).
    pub fn summarize<T: Float>(residuals: &[T], labels: &[T]) -> Vec<LevelSummary<T>> {
        debug_assert_eq!(residuals.len(), labels.len());
        let n = labels.len();
        if n == 0 {
            return Vec::new();
        }
        let n_t = T::from(n).unwrap_or_else(T::infinity);

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| labels[a].partial_cmp(&labels[b]).unwrap_or(Ordering::Equal));

        let mut rows = Vec::new();
        let mut start = 0;
        while start < n {
            let value = labels[order[start]];
            let mut end = start + 1;
            let mut sum = residuals[order[start]];
            while end < n && labels[order[end]] == value {
                sum = sum + residuals[order[end]];
                end += 1;
            }

            let count = end - start;
            let count_t = T::from(count).unwrap_or_else(T::infinity);
            rows.push(LevelSummary {
                value,
                mean: sum / count_t,
                share: count_t / n_t,
                count,
            });
            start = end;
        }

        rows
    }
}
