//! Input validation for configuration, training data and prediction data.
//!
//! ## Purpose
//!
//! This module checks shapes, indices, cluster counts and numeric values
//! before any estimation work starts, so a fit either succeeds completely or
//! fails with a descriptive error.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CatClustError;

/// Smallest cluster count accepted by the fit entry point.
pub const MIN_CLUSTERS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate training predictors `x` (row-major, `dimensions` columns) and
    /// outcome `y`.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        dimensions: usize,
    ) -> Result<(), CatClustError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(CatClustError::EmptyInput);
        }

        // Check 2: One row of predictors per outcome
        if x.len() != y.len() * dimensions {
            return Err(CatClustError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
                dimensions,
            });
        }

        // Check 3: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate new predictors passed to prediction.
    pub fn validate_predictors<T: Float>(x: &[T], dimensions: usize) -> Result<(), CatClustError> {
        if x.is_empty() {
            return Err(CatClustError::EmptyInput);
        }
        if x.len() % dimensions != 0 {
            return Err(CatClustError::MismatchedInputs {
                x_len: x.len(),
                y_len: x.len() / dimensions,
                dimensions,
            });
        }
        Self::validate_finite(x, "x")
    }

    fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), CatClustError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(CatClustError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of predictor columns.
    pub fn validate_dimensions(dimensions: usize) -> Result<(), CatClustError> {
        if dimensions == 0 {
            return Err(CatClustError::InvalidDimensions(dimensions));
        }
        Ok(())
    }

    /// Validate that the category column addresses a predictor column.
    pub fn validate_category_column(index: usize, dimensions: usize) -> Result<(), CatClustError> {
        if index >= dimensions {
            return Err(CatClustError::InvalidCategoryColumn { index, dimensions });
        }
        Ok(())
    }

    /// Validate the requested cluster count.
    pub fn validate_clusters(k: usize) -> Result<(), CatClustError> {
        if k < MIN_CLUSTERS {
            return Err(CatClustError::InvalidClusters {
                got: k,
                min: MIN_CLUSTERS,
            });
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CatClustError> {
        if let Some(parameter) = duplicate_param {
            return Err(CatClustError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
