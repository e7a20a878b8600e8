//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit goodness-of-fit measures computed on the
//! training data: RMSE, MAE, R^2, and the share of level-mean dispersion
//! explained by the clustering.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-sample fit diagnostics.
pub mod diagnostics;
