//! Fitted model object and its cluster map.
//!
//! ## Purpose
//!
//! This module defines [`CatClustModel`], the immutable product of a fit. It
//! owns the cluster map (one row per training level), the per-cluster means,
//! the unconditional residual mean used for unseen levels, and the covariate
//! slopes. Prediction lives in `engine::predictor`.
//!
//! ## Invariants
//!
//! * Level rows are sorted by label and keyed by distinct label.
//! * Every level row carries exactly one cluster id in `1..=clusters_used`.
//! * `cluster_means[id - 1]` equals the share-weighted mean of the level
//!   means assigned to `id`.
//! * The model is never mutated after construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

/// Cluster id reported for a category level never seen during training.
///
/// Real cluster ids start at 1, so 0 never collides with an assignment.
pub const UNASSIGNED_CLUSTER: usize = 0;

/// One row of the cluster map.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRow<T> {
    /// Category label.
    pub value: T,

    /// Mean residualized outcome of the level.
    pub mean: T,

    /// Sample share of the level.
    pub share: T,

    /// Number of training observations with this label.
    pub count: usize,

    /// Cluster id in `1..=clusters_used`.
    pub cluster: usize,

    /// Mean of the level's cluster.
    pub cluster_mean: T,
}

/// Fitted grouped-level regression model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CatClustModel<T> {
    pub(crate) levels: Vec<LevelRow<T>>,
    pub(crate) cluster_means: Vec<T>,
    pub(crate) cluster_weights: Vec<T>,
    pub(crate) unconditional_mean: T,
    pub(crate) coefficients: Option<Vec<T>>,
    pub(crate) category_column: usize,
    pub(crate) dimensions: usize,
    pub(crate) clusters_requested: usize,
    pub(crate) clusters_effective: usize,
    pub(crate) objective: T,
    pub(crate) n_obs: usize,
    pub(crate) diagnostics: Option<Diagnostics<T>>,
    pub(crate) residuals: Option<Vec<T>>,
}

impl<T: Float> CatClustModel<T> {
    /// Cluster map rows, sorted by label.
    pub fn levels(&self) -> &[LevelRow<T>] {
        &self.levels
    }

    /// Mean of each cluster, indexed by `id - 1`.
    pub fn cluster_means(&self) -> &[T] {
        &self.cluster_means
    }

    /// Total sample share of each cluster, indexed by `id - 1`.
    pub fn cluster_weights(&self) -> &[T] {
        &self.cluster_weights
    }

    /// Mean residualized outcome over all training observations.
    pub fn unconditional_mean(&self) -> T {
        self.unconditional_mean
    }

    /// Covariate slopes in column order (category column excluded).
    pub fn coefficients(&self) -> Option<&[T]> {
        self.coefficients.as_deref()
    }

    /// Index of the categorical predictor column.
    pub fn category_column(&self) -> usize {
        self.category_column
    }

    /// Number of predictor columns.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// K as configured.
    pub fn clusters_requested(&self) -> usize {
        self.clusters_requested
    }

    /// K after clamping to the number of distinct level means.
    pub fn clusters_effective(&self) -> usize {
        self.clusters_effective
    }

    /// Number of clusters present in the map.
    pub fn clusters_used(&self) -> usize {
        self.cluster_means.len()
    }

    /// Weighted within-cluster sum of squares of the level means.
    pub fn objective(&self) -> T {
        self.objective
    }

    /// Number of training observations.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// In-sample diagnostics, if requested.
    pub fn diagnostics(&self) -> Option<&Diagnostics<T>> {
        self.diagnostics.as_ref()
    }

    /// In-sample residuals `y - fitted`, if requested.
    pub fn residuals(&self) -> Option<&[T]> {
        self.residuals.as_deref()
    }
}

impl<T: Float> Display for CatClustModel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let to_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.n_obs)?;
        writeln!(f, "  Levels: {}", self.levels.len())?;
        writeln!(
            f,
            "  Clusters: {} (requested {})",
            self.clusters_used(),
            self.clusters_requested
        )?;
        writeln!(f, "  Objective: {:.6}", to_f64(self.objective))?;
        writeln!(
            f,
            "  Unconditional mean: {:.6}",
            to_f64(self.unconditional_mean)
        )?;

        if let Some(coefficients) = &self.coefficients {
            writeln!(f)?;
            writeln!(f, "Coefficients:")?;
            for (j, &b) in coefficients.iter().enumerate() {
                writeln!(f, "  beta[{}]: {:.6}", j, to_f64(b))?;
            }
        }

        if let Some(d) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            writeln!(f, "  RMSE:          {:.6}", to_f64(d.rmse))?;
            writeln!(f, "  MAE:           {:.6}", to_f64(d.mae))?;
            writeln!(f, "  R^2:           {:.6}", to_f64(d.r_squared))?;
            writeln!(f, "  Between share: {:.6}", to_f64(d.between_share))?;
        }

        writeln!(f)?;
        writeln!(f, "Cluster Map:")?;
        writeln!(
            f,
            "  {:>10} {:>12} {:>10} {:>8} {:>8} {:>13}",
            "Level", "Mean", "Share", "Count", "Cluster", "Cluster_Mean"
        )?;
        writeln!(f, "  {}", "-".repeat(66))?;
        for row in &self.levels {
            writeln!(
                f,
                "  {:>10.2} {:>12.5} {:>10.4} {:>8} {:>8} {:>13.5}",
                to_f64(row.value),
                to_f64(row.mean),
                to_f64(row.share),
                row.count,
                row.cluster,
                to_f64(row.cluster_mean)
            )?;
        }
        Ok(())
    }
}
