//! Execution engine for fitting grouped-level models.
//!
//! ## Purpose
//!
//! This module runs the fit pipeline end to end:
//!
//! 1. **Residualize**: remove the covariate projection from the outcome.
//! 2. **Summarize**: per-level mean residual and sample share.
//! 3. **Partition**: exact weighted 1-D clustering of the level means.
//! 4. **Assemble**: join summaries with the partition into a [`CatClustModel`].
//!
//! ## Design notes
//!
//! * Intermediates (residual vector, level table) are local values handed
//!   from stage to stage; nothing outlives the call except the model.
//! * The solver can be replaced through a hidden hook for testing.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * A model is returned only when every stage succeeded.
//! * Level summary row `i` is paired with partition point `i`.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not iterate between covariate fitting and clustering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::partition::{OptimalPartitioner, PartitionStrategy, WeightedPartition};
use crate::algorithms::residualize::{LinearResidualizer, Residualized};
use crate::algorithms::summarize::{LevelSummarizer, LevelSummary};
use crate::engine::output::{CatClustModel, LevelRow};
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::linalg::{FloatLinalg, FnSolver, LeastSquaresSolver, PseudoInverseSolver, SolveFn};
use crate::primitives::design::DesignView;
use crate::primitives::errors::CatClustError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a fit.
#[derive(Debug, Clone)]
pub struct FitConfig<T> {
    /// Requested number of clusters K.
    pub clusters: usize,

    /// Number of predictor columns.
    pub dimensions: usize,

    /// Index of the categorical predictor column.
    pub category_column: usize,

    /// How the dynamic program fills each row.
    pub partition_strategy: PartitionStrategy,

    /// Compute in-sample diagnostics.
    pub return_diagnostics: bool,

    /// Keep in-sample residuals on the model.
    pub return_residuals: bool,

    /// Replacement least-squares solve.
    #[doc(hidden)]
    pub custom_solver: Option<SolveFn<T>>,
}

impl<T> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            clusters: 2,
            dimensions: 1,
            category_column: 0,
            partition_strategy: PartitionStrategy::default(),
            return_diagnostics: false,
            return_residuals: false,
            custom_solver: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the fit pipeline for one dataset.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit a model on validated row-major predictors `x` and outcome `y`.
    pub fn run<T: FloatLinalg>(
        x: &[T],
        y: &[T],
        config: &FitConfig<T>,
    ) -> Result<CatClustModel<T>, CatClustError> {
        let design = DesignView::new(x, config.dimensions, config.category_column);
        let labels = design.labels();

        // Stage 1: residualize
        let residualized = match config.custom_solver {
            Some(solve) => Self::residualize(&FnSolver(solve), &design, y, &labels)?,
            None => Self::residualize(&PseudoInverseSolver, &design, y, &labels)?,
        };

        // Stage 2: summarize levels
        let summaries = LevelSummarizer::summarize(&residualized.residuals, &labels);
        log::debug!("summarized {} observations into {} levels", y.len(), summaries.len());

        // Stage 3: partition level means
        let means: Vec<T> = summaries.iter().map(|s| s.mean).collect();
        let shares: Vec<T> = summaries.iter().map(|s| s.share).collect();
        let partition = OptimalPartitioner::new(config.partition_strategy).partition(
            &means,
            &shares,
            config.clusters,
        )?;

        // Stage 4: assemble
        let mut model = ClusterMapBuilder::build(
            &summaries,
            &partition,
            &residualized.residuals,
            residualized.coefficients,
            config,
        );

        if config.return_diagnostics || config.return_residuals {
            let fitted = model.predict(x)?;
            if config.return_diagnostics {
                let dispersion = level_dispersion(&summaries);
                model.diagnostics = Some(Diagnostics::compute(
                    y,
                    &fitted,
                    model.objective,
                    dispersion,
                ));
            }
            if config.return_residuals {
                model.residuals = Some(y.iter().zip(&fitted).map(|(&yi, &fi)| yi - fi).collect());
            }
        }

        Ok(model)
    }

    fn residualize<T: FloatLinalg>(
        solver: &dyn LeastSquaresSolver<T>,
        design: &DesignView<'_, T>,
        y: &[T],
        labels: &[T],
    ) -> Result<Residualized<T>, CatClustError> {
        let p = design.n_covariates();
        let covariates = if p > 0 {
            design.covariates_col_major()
        } else {
            Vec::new()
        };
        LinearResidualizer::new(solver).residualize(y, &covariates, p, labels)
    }
}

// ============================================================================
// Cluster Map Assembly
// ============================================================================

/// Joins level summaries with a partition into the fitted model.
pub struct ClusterMapBuilder;

impl ClusterMapBuilder {
    /// Assemble a model; `summaries[i]` is matched with partition point `i`.
    pub fn build<T: FloatLinalg>(
        summaries: &[LevelSummary<T>],
        partition: &WeightedPartition<T>,
        residuals: &[T],
        coefficients: Option<Vec<T>>,
        config: &FitConfig<T>,
    ) -> CatClustModel<T> {
        debug_assert_eq!(summaries.len(), partition.assignments.len());

        let levels = summaries
            .iter()
            .zip(&partition.assignments)
            .map(|(s, &cluster)| LevelRow {
                value: s.value,
                mean: s.mean,
                share: s.share,
                count: s.count,
                cluster,
                cluster_mean: partition.cluster_means[cluster - 1],
            })
            .collect();

        let n = T::from(residuals.len()).unwrap_or_else(T::one);
        let unconditional_mean = residuals.iter().fold(T::zero(), |acc, &r| acc + r) / n;

        CatClustModel {
            levels,
            cluster_means: partition.cluster_means.clone(),
            cluster_weights: partition.cluster_weights.clone(),
            unconditional_mean,
            coefficients,
            category_column: config.category_column,
            dimensions: config.dimensions,
            clusters_requested: config.clusters,
            clusters_effective: partition.clusters_effective,
            objective: partition.objective,
            n_obs: residuals.len(),
            diagnostics: None,
            residuals: None,
        }
    }
}

/// Share-weighted dispersion of level means around their weighted mean.
fn level_dispersion<T: FloatLinalg>(summaries: &[LevelSummary<T>]) -> T {
    let grand = summaries
        .iter()
        .fold(T::zero(), |acc, s| acc + s.share * s.mean);
    summaries.iter().fold(T::zero(), |acc, s| {
        let d = s.mean - grand;
        acc + s.share * d * d
    })
}
