//! High-level API for grouped-level regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the fit parameters; `.build()` validates them and
//! returns a [`CatClustEstimator`] whose `.fit()` produces the model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CatClustBuilder`] via `CatClust::new()`.
//! 2. Chain configuration methods (`.clusters()`, `.dimensions()`, etc.).
//! 3. Call `.build()` to get an estimator, then `.fit(&x, &y)`.

// Internal dependencies
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::math::linalg::{FloatLinalg, SolveFn};

// Publicly re-exported types
pub use crate::algorithms::partition::PartitionStrategy;
pub use crate::engine::executor::FitConfig;
pub use crate::engine::output::{CatClustModel, LevelRow, UNASSIGNED_CLUSTER};
pub use crate::engine::predictor::{PredictKind, Prediction};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::CatClustError;

/// Fluent builder for configuring a grouped-level regression fit.
#[derive(Debug, Clone)]
pub struct CatClustBuilder<T> {
    /// Number of clusters K (default: 2).
    pub clusters: Option<usize>,

    /// Number of predictor columns (default: 1).
    pub dimensions: Option<usize>,

    /// Index of the categorical predictor column (default: 0).
    pub category_column: Option<usize>,

    /// Dynamic-programming strategy (default: DivideAndConquer).
    pub partition_strategy: Option<PartitionStrategy>,

    /// Compute in-sample diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Keep in-sample residuals.
    pub return_residuals: Option<bool>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom least-squares solve.
    #[doc(hidden)]
    pub custom_solver: Option<SolveFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for CatClustBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> CatClustBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            clusters: None,
            dimensions: None,
            category_column: None,
            partition_strategy: None,
            return_diagnostics: None,
            return_residuals: None,
            custom_solver: None,
            duplicate_param: None,
        }
    }

    /// Set the number of clusters K (at least 2).
    pub fn clusters(mut self, k: usize) -> Self {
        if self.clusters.is_some() {
            self.duplicate_param = Some("clusters");
        }
        self.clusters = Some(k);
        self
    }

    /// Set the number of predictor columns, category column included.
    pub fn dimensions(mut self, dims: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dims);
        self
    }

    /// Set which predictor column holds the category labels.
    pub fn category_column(mut self, index: usize) -> Self {
        if self.category_column.is_some() {
            self.duplicate_param = Some("category_column");
        }
        self.category_column = Some(index);
        self
    }

    /// Set the dynamic-programming strategy.
    pub fn partition_strategy(mut self, strategy: PartitionStrategy) -> Self {
        if self.partition_strategy.is_some() {
            self.duplicate_param = Some("partition_strategy");
        }
        self.partition_strategy = Some(strategy);
        self
    }

    /// Include RMSE, MAE, R^2 and between-cluster share in the model.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Keep in-sample residuals on the model.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    #[doc(hidden)]
    pub fn custom_solver(mut self, solve: SolveFn<T>) -> Self {
        self.custom_solver = Some(solve);
        self
    }

    /// Validate the configuration and produce an estimator.
    pub fn build(self) -> Result<CatClustEstimator<T>, CatClustError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = FitConfig::<T>::default();
        let config = FitConfig {
            clusters: self.clusters.unwrap_or(defaults.clusters),
            dimensions: self.dimensions.unwrap_or(defaults.dimensions),
            category_column: self.category_column.unwrap_or(defaults.category_column),
            partition_strategy: self
                .partition_strategy
                .unwrap_or(defaults.partition_strategy),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
            return_residuals: self.return_residuals.unwrap_or(false),
            custom_solver: self.custom_solver,
        };

        Validator::validate_clusters(config.clusters)?;
        Validator::validate_dimensions(config.dimensions)?;
        Validator::validate_category_column(config.category_column, config.dimensions)?;

        Ok(CatClustEstimator { config })
    }
}

/// Validated, reusable fit configuration.
#[derive(Debug, Clone)]
pub struct CatClustEstimator<T> {
    config: FitConfig<T>,
}

impl<T: FloatLinalg> CatClustEstimator<T> {
    /// Fit on row-major predictors `x` (`dimensions` columns) and outcome `y`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<CatClustModel<T>, CatClustError> {
        Validator::validate_inputs(x, y, self.config.dimensions)?;
        FitExecutor::run(x, y, &self.config)
    }

    /// The validated configuration.
    pub fn config(&self) -> &FitConfig<T> {
        &self.config
    }
}
