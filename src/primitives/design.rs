//! Row-major view over a predictor matrix with one categorical column.
//!
//! ## Purpose
//!
//! Fitting and prediction both receive predictors as a flat, row-major slice
//! with a fixed number of columns. This view separates the category column
//! from the continuous covariates without copying the matrix.
//!
//! ## Invariants
//!
//! * `data.len() == n_rows * dimensions`.
//! * `category_column < dimensions`.
//! * Covariates keep their original left-to-right order with the category
//!   column removed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Borrowed predictor matrix split into a category column and covariates.
#[derive(Debug, Clone, Copy)]
pub struct DesignView<'a, T> {
    data: &'a [T],
    dimensions: usize,
    category_column: usize,
}

impl<'a, T: Float> DesignView<'a, T> {
    /// Wrap a validated row-major matrix.
    pub fn new(data: &'a [T], dimensions: usize, category_column: usize) -> Self {
        debug_assert!(dimensions > 0 && data.len() % dimensions == 0);
        debug_assert!(category_column < dimensions);
        Self {
            data,
            dimensions,
            category_column,
        }
    }

    /// Number of observations.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.dimensions
    }

    /// Number of continuous covariates (all columns except the category column).
    #[inline]
    pub fn n_covariates(&self) -> usize {
        self.dimensions - 1
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        &self.data[i * self.dimensions..(i + 1) * self.dimensions]
    }

    /// Category label of row `i`.
    #[inline]
    pub fn label(&self, i: usize) -> T {
        self.data[i * self.dimensions + self.category_column]
    }

    /// All category labels in row order.
    pub fn labels(&self) -> Vec<T> {
        (0..self.n_rows()).map(|i| self.label(i)).collect()
    }

    /// Covariates as a column-major `n_rows x n_covariates` buffer.
    pub fn covariates_col_major(&self) -> Vec<T> {
        let n = self.n_rows();
        let mut out = Vec::with_capacity(n * self.n_covariates());
        for col in (0..self.dimensions).filter(|&c| c != self.category_column) {
            out.extend((0..n).map(|i| self.data[i * self.dimensions + col]));
        }
        out
    }

    /// Linear covariate contribution of row `i`: `sum_j x_ij * beta_j`.
    pub fn covariate_dot(&self, i: usize, coefficients: &[T]) -> T {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|&(c, _)| c != self.category_column)
            .zip(coefficients.iter())
            .fold(T::zero(), |acc, ((_, &x), &b)| acc + x * b)
    }
}
