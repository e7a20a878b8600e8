//! In-sample diagnostics for a fitted grouped-level model.
//!
//! ## Purpose
//!
//! This module summarizes how well the piecewise-constant fit reproduces the
//! training outcome, and how much of the between-level dispersion survives
//! the reduction from one mean per level to one mean per cluster.
//!
//! ## Key concepts
//!
//! * **R^2**: `1 - RSS / TSS` against an intercept-only model.
//! * **Between share**: `1 - objective / level_dispersion`, where
//!   `level_dispersion = sum share_l * (mean_l - grand_mean)^2`. A value of 1
//!   means clustering lost nothing relative to one group per level.
//!
//! ## Non-goals
//!
//! * No standard errors, tests or intervals.

// External dependencies
use num_traits::Float;

/// Goodness-of-fit measures on the training data.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Fraction of weighted level-mean dispersion captured between clusters.
    pub between_share: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from the outcome, in-sample fitted values, the
    /// partition objective, and the weighted dispersion of the level means.
    pub fn compute(y: &[T], fitted: &[T], objective: T, level_dispersion: T) -> Self {
        debug_assert_eq!(y.len(), fitted.len());
        let n = T::from(y.len()).unwrap_or_else(T::one);

        let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let (rss, abs_sum, tss) = y.iter().zip(fitted.iter()).fold(
            (T::zero(), T::zero(), T::zero()),
            |(rss, abs_sum, tss), (&yi, &fi)| {
                let r = yi - fi;
                let d = yi - mean_y;
                (rss + r * r, abs_sum + r.abs(), tss + d * d)
            },
        );

        let r_squared = if tss > T::zero() {
            T::one() - rss / tss
        } else {
            T::zero()
        };
        let between_share = if level_dispersion > T::zero() {
            T::one() - objective / level_dispersion
        } else {
            T::one()
        };

        Self {
            rmse: (rss / n).sqrt(),
            mae: abs_sum / n,
            r_squared,
            between_share,
        }
    }
}
