//! Covariate residualization.
//!
//! ## Purpose
//!
//! This module removes the linear contribution of the continuous covariates
//! from the outcome, leaving a residual that is presumed to depend mainly on
//! the categorical predictor.
//!
//! ## Design notes
//!
//! * **Augmented design**: Covariates are followed by one indicator column
//!   per distinct level. No intercept column is added; the indicators absorb it.
//! * **Generalized inverse**: The solve goes through [`LeastSquaresSolver`],
//!   which must tolerate the collinearity the indicator block introduces.
//! * **Slopes only**: Only the first `p` coefficients (the covariate slopes)
//!   are kept; level effects are re-estimated by the summarizer.
//!
//! ## Invariants
//!
//! * With no covariates the outcome is returned unchanged and no coefficients
//!   are reported.
//! * Returned coefficients are finite; a failed solve is an error, never zeros.
//!
//! ## Non-goals
//!
//! * This module does not estimate covariates and clusters jointly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// Internal dependencies
use crate::math::linalg::{FloatLinalg, LeastSquaresSolver};
use crate::primitives::errors::CatClustError;
use crate::primitives::level::LevelKey;

/// Outcome with the covariate contribution removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Residualized<T> {
    /// `y - X * beta`, one entry per observation.
    pub residuals: Vec<T>,

    /// Covariate slopes, or `None` when there are no covariates.
    pub coefficients: Option<Vec<T>>,
}

/// Removes the best linear covariate projection from the outcome.
pub struct LinearResidualizer<'s, T> {
    solver: &'s dyn LeastSquaresSolver<T>,
}

impl<'s, T: FloatLinalg> LinearResidualizer<'s, T> {
    /// Create a residualizer backed by `solver`.
    pub fn new(solver: &'s dyn LeastSquaresSolver<T>) -> Self {
        Self { solver }
    }

    /// Residualize `y` against `covariates` (column-major, `n x n_covariates`).
    pub fn residualize(
        &self,
        y: &[T],
        covariates: &[T],
        n_covariates: usize,
        labels: &[T],
    ) -> Result<Residualized<T>, CatClustError> {
        let n = y.len();
        if n == 0 {
            return Err(CatClustError::SingularDesign(
                "design has zero observations".into(),
            ));
        }
        if n_covariates == 0 {
            return Ok(Residualized {
                residuals: y.to_vec(),
                coefficients: None,
            });
        }
        debug_assert_eq!(covariates.len(), n * n_covariates);
        debug_assert_eq!(labels.len(), n);

        let (design, n_cols) = augmented_design(covariates, n_covariates, labels);

        let solution = self.solver.solve(&design, n, n_cols, y).ok_or_else(|| {
            log::warn!("least-squares solve failed for {n} x {n_cols} design");
            CatClustError::SingularDesign(format!(
                "solver returned no coefficients for {n} x {n_cols} design"
            ))
        })?;
        if solution.len() != n_cols {
            return Err(CatClustError::SingularDesign(format!(
                "solver returned {} coefficients, expected {n_cols}",
                solution.len()
            )));
        }

        let coefficients = solution[..n_covariates].to_vec();
        if let Some(j) = coefficients.iter().position(|b| !b.is_finite()) {
            log::warn!("non-finite slope for covariate {j}");
            return Err(CatClustError::SingularDesign(format!(
                "coefficient for covariate {j} is not finite"
            )));
        }

        let residuals = y
            .iter()
            .enumerate()
            .map(|(i, &yi)| {
                let fitted = coefficients
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (j, &b)| acc + covariates[j * n + i] * b);
                yi - fitted
            })
            .collect();

        Ok(Residualized {
            residuals,
            coefficients: Some(coefficients),
        })
    }
}

/// Covariates followed by one indicator column per distinct label.
///
/// Returns the column-major buffer and its column count.
fn augmented_design<T: FloatLinalg>(
    covariates: &[T],
    n_covariates: usize,
    labels: &[T],
) -> (Vec<T>, usize) {
    let n = labels.len();

    let mut columns: BTreeMap<LevelKey, usize> = BTreeMap::new();
    for &label in labels {
        let next = columns.len();
        columns.entry(LevelKey::new(label)).or_insert(next);
    }
    let n_levels = columns.len();
    let n_cols = n_covariates + n_levels;

    let mut design = vec![T::zero(); n * n_cols];
    design[..n * n_covariates].copy_from_slice(&covariates[..n * n_covariates]);
    for (i, &label) in labels.iter().enumerate() {
        let level = columns[&LevelKey::new(label)];
        design[(n_covariates + level) * n + i] = T::one();
    }

    log::debug!("augmented design: {n} rows, {n_covariates} covariates, {n_levels} levels");
    (design, n_cols)
}
