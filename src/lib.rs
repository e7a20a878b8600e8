//! # catclust: Grouped-Level Regression for Rust
//!
//! Estimate a conditional expectation function when one predictor is
//! categorical with many levels and the rest are continuous.
//!
//! ## What is grouped-level regression?
//!
//! Fitting one coefficient per category level overfits when the number of
//! levels is large relative to the sample size. Instead, this crate
//! partitions the levels into a small number K of groups with similar
//! conditional means and fits a function that is piecewise constant over
//! those groups, plus a linear adjustment for the continuous covariates:
//!
//! ```text
//! E[y | z, x] ≈ mu(cluster(z)) + x' beta
//! ```
//!
//! **How a fit works:**
//!
//! 1. Regress `y` on the covariates plus a full one-hot expansion of the
//!    levels (generalized inverse, tolerant of collinearity) and remove the
//!    covariate contribution.
//! 2. Compute each level's mean residual and sample share.
//! 3. Partition the sorted level means into K contiguous clusters minimizing
//!    the share-weighted within-cluster sum of squares. The partition is the
//!    exact global optimum, found by dynamic programming.
//! 4. Store the cluster map; predictions look levels up in it, and unseen
//!    levels fall back to the unconditional mean.
//!
//! ## Quick Start
//!
//! ```rust
//! use catclust_rs::prelude::*;
//!
//! // Row-major predictors: column 0 is the category, column 1 a covariate.
//! let x = vec![
//!     1.0, 0.5,
//!     1.0, -0.5,
//!     2.0, 0.2,
//!     2.0, -0.2,
//!     3.0, 1.0,
//!     3.0, -1.0,
//! ];
//! let y = vec![1.5, 0.5, 1.2, 0.8, 6.0, 4.0];
//!
//! let model = CatClust::new()
//!     .clusters(2)       // K
//!     .dimensions(2)     // predictor columns
//!     .category_column(0)
//!     .build()?
//!     .fit(&x, &y)?;
//!
//! // Level 9 was never seen: its fitted value uses the unconditional mean.
//! let new_x = [3.0, 0.0, 9.0, 0.0];
//! let fitted = model.predict(&new_x)?;
//! let ids = model.predict_clusters(&new_x)?;
//!
//! assert_eq!(fitted.len(), 2);
//! assert_eq!(ids[1], UNASSIGNED_CLUSTER);
//! println!("{}", model);
//! # Result::<(), CatClustError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<CatClustModel<T>, CatClustError>`. Errors are
//! raised for empty or mis-shaped inputs, non-finite values, an out-of-range
//! category column, K < 2, or a covariate design the solver cannot handle.
//! A failed fit never yields a partial model.
//!
//! Unseen category levels at prediction time are **not** errors:
//!
//! - `predict` returns the unconditional training mean (plus the covariate
//!   contribution);
//! - `predict_clusters` returns [`UNASSIGNED_CLUSTER`](prelude::UNASSIGNED_CLUSTER) (0).
//!
//! ## Parameters
//!
//! | Parameter              | Default            | Range/Options                        | Description                            |
//! |------------------------|--------------------|--------------------------------------|----------------------------------------|
//! | **clusters**           | 2                  | [2, ∞)                               | Number of level clusters K             |
//! | **dimensions**         | 1                  | [1, ∞)                               | Predictor columns, category included   |
//! | **category_column**    | 0                  | [0, dimensions)                      | Column holding the category labels     |
//! | **partition_strategy** | `DivideAndConquer` | `DivideAndConquer`, `Exhaustive`     | How the DP rows are filled             |
//! | **return_diagnostics** | false              | true/false                           | RMSE, MAE, R^2, between-cluster share  |
//! | **return_residuals**   | false              | true/false                           | Keep in-sample residuals               |
//!
//! If K exceeds the number of distinct level means it is clamped to that
//! count; the model reports both `clusters_requested()` and
//! `clusters_effective()`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! catclust-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Pipeline stages emit `log::debug!` records and K clamping or solver
//! failures emit `log::warn!`. No logger is installed by the crate.
//!
//! ## License
//!
//! Dual-licensed under MIT or Apache-2.0.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, exact-value level keys, and the row-major
// predictor view.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the generalized-inverse least-squares backend and weighted
// prefix moments.
mod math;

// Layer 3: Algorithms - estimation stages.
//
// Contains covariate residualization, level summaries, and the exact
// weighted 1-D partitioner.
mod algorithms;

// Layer 4: Evaluation - post-fit diagnostics.
//
// Contains RMSE, MAE, R^2 and between-cluster share.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the fit pipeline, the model object and prediction.
mod engine;

// High-level fluent API.
//
// Provides the `CatClust` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use catclust_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CatClustBuilder as CatClust, CatClustError, CatClustEstimator, CatClustModel,
        Diagnostics, LevelRow, PartitionStrategy,
        PartitionStrategy::{DivideAndConquer, Exhaustive},
        PredictKind,
        PredictKind::{ClusterIds, FittedValues},
        Prediction, UNASSIGNED_CLUSTER,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal estimation algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
