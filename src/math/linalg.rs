//! Linear algebra backend abstraction for the covariate adjustment.
//!
//! ## Purpose
//!
//! This module provides the generalized-inverse least-squares solve used to
//! estimate covariate slopes. The rest of the crate only sees the narrow
//! [`LeastSquaresSolver`] interface: a column-major design plus a right-hand
//! side in, one coefficient per column out.
//!
//! ## Design notes
//!
//! * Uses a thin SVD and truncates singular values below
//!   `eps * max(n_rows, n_cols) * sigma_max`, which yields the minimum-norm
//!   solution when the design is rank deficient (one-hot level indicators
//!   plus covariates are frequently collinear).
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//!
//! ## Invariants
//!
//! * A returned coefficient vector always has exactly `n_cols` entries.
//! * `None` is returned only when no solve is possible at all (empty or
//!   all-zero design, shape mismatch, SVD failure).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the Nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Minimum-norm least-squares solve of `A * beta = b`.
    ///
    /// `design` is column-major with shape `n_rows x n_cols`.
    fn lstsq_min_norm(
        design: &[Self],
        n_rows: usize,
        n_cols: usize,
        rhs: &[Self],
    ) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn lstsq_min_norm(
        design: &[Self],
        n_rows: usize,
        n_cols: usize,
        rhs: &[Self],
    ) -> Option<Vec<Self>> {
        let rel_eps = f64::EPSILON * n_rows.max(n_cols) as f64;
        nalgebra_backend::min_norm_solve(design, n_rows, n_cols, rhs, rel_eps)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn lstsq_min_norm(
        design: &[Self],
        n_rows: usize,
        n_cols: usize,
        rhs: &[Self],
    ) -> Option<Vec<Self>> {
        let rel_eps = f32::EPSILON * n_rows.max(n_cols) as f32;
        nalgebra_backend::min_norm_solve(design, n_rows, n_cols, rhs, rel_eps)
    }
}

// ============================================================================
// Solver Interface
// ============================================================================

/// Generalized-inverse least-squares service consumed by the residualizer.
pub trait LeastSquaresSolver<T> {
    /// Solve `A * beta = b` for a column-major `n_rows x n_cols` design.
    ///
    /// Must return one coefficient per column, using the minimum-norm
    /// solution when the design is singular.
    fn solve(&self, design: &[T], n_rows: usize, n_cols: usize, rhs: &[T]) -> Option<Vec<T>>;
}

/// Signature of a pluggable solve function.
pub type SolveFn<T> = fn(&[T], usize, usize, &[T]) -> Option<Vec<T>>;

/// Default solver backed by nalgebra's SVD.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoInverseSolver;

impl<T: FloatLinalg> LeastSquaresSolver<T> for PseudoInverseSolver {
    #[inline]
    fn solve(&self, design: &[T], n_rows: usize, n_cols: usize, rhs: &[T]) -> Option<Vec<T>> {
        T::lstsq_min_norm(design, n_rows, n_cols, rhs)
    }
}

/// Adapts a plain [`SolveFn`] to the solver interface.
#[derive(Debug, Clone, Copy)]
pub struct FnSolver<T>(pub SolveFn<T>);

impl<T> LeastSquaresSolver<T> for FnSolver<T> {
    #[inline]
    fn solve(&self, design: &[T], n_rows: usize, n_cols: usize, rhs: &[T]) -> Option<Vec<T>> {
        (self.0)(design, n_rows, n_cols, rhs)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Minimum-norm solve via truncated SVD.
    ///
    /// Singular values below `rel_eps * sigma_max` are treated as zero.
    pub fn min_norm_solve<R: RealField + Copy>(
        design: &[R],
        n_rows: usize,
        n_cols: usize,
        rhs: &[R],
        rel_eps: R,
    ) -> Option<Vec<R>> {
        if n_rows == 0 || n_cols == 0 || design.len() != n_rows * n_cols || rhs.len() != n_rows
        {
            return None;
        }

        let matrix = DMatrix::from_column_slice(n_rows, n_cols, design);
        let b = DVector::from_column_slice(rhs);

        let svd = matrix.svd(true, true);
        let sigma_max = svd
            .singular_values
            .iter()
            .fold(nalgebra::zero::<R>(), |acc, &s| if s > acc { s } else { acc });
        if sigma_max <= nalgebra::zero::<R>() {
            return None;
        }

        svd.solve(&b, sigma_max * rel_eps)
            .ok()
            .map(|s: DVector<R>| s.as_slice().to_vec())
    }
}
