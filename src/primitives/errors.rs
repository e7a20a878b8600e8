//! Error types for grouped-level regression.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: configuration, fitting, partitioning and
//! prediction.
//!
//! ## Design notes
//!
//! * **Derived**: Messages are declared with `thiserror`, which also works
//!   without the standard library.
//! * **Comparable**: `Clone` and `PartialEq` so tests can match on exact values.
//! * **Fail-Fast**: Fitting aborts on the first error; no partial model is returned.
//!
//! ## Key concepts
//!
//! * **Invalid arguments**: Empty data, shape mismatches, bad column indices,
//!   bad cluster counts, negative weights, non-finite numbers.
//! * **Singular design**: The least-squares solver could not produce
//!   coefficients for the covariate adjustment.
//!
//! ## Non-goals
//!
//! * Unseen category levels at prediction time are not errors; they take the
//!   documented fallback path.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use thiserror::Error;

/// Errors raised while configuring, fitting or predicting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatClustError {
    /// Input arrays are empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Predictor matrix and outcome do not describe the same number of rows.
    #[error(
        "Length mismatch: x has {x_len} values ({dimensions} columns per row), y has {y_len}"
    )]
    MismatchedInputs {
        /// Length of the flattened predictor matrix.
        x_len: usize,
        /// Length of the outcome (or expected row count).
        y_len: usize,
        /// Declared number of predictor columns.
        dimensions: usize,
    },

    /// Number of predictor columns is zero.
    #[error("Invalid dimensions: {0} (must be at least 1)")]
    InvalidDimensions(usize),

    /// Category column index does not address a predictor column.
    #[error("Invalid category column: {index} (must be less than dimensions {dimensions})")]
    InvalidCategoryColumn {
        /// Requested column index.
        index: usize,
        /// Number of predictor columns.
        dimensions: usize,
    },

    /// Requested cluster count is below the minimum.
    #[error("Invalid cluster count: {got} (must be at least {min})")]
    InvalidClusters {
        /// Requested K.
        got: usize,
        /// Smallest accepted K.
        min: usize,
    },

    /// A partition weight is negative.
    #[error("Invalid weight at index {index}: weights must be non-negative")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
    },

    /// A NaN or infinite value was found in the input.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The covariate design could not be solved.
    #[error("Singular design: {0}")]
    SingularDesign(String),

    /// A builder parameter was configured more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}
