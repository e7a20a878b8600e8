//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the three estimation stages of a fit:
//! - Covariate residualization (generalized-inverse projection)
//! - Per-level summaries of the residual
//! - Exact weighted 1-D optimal partitioning of the level means
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted optimal 1-D partitioning.
pub mod partition;

/// Covariate residualization.
pub mod residualize;

/// Per-level means and shares.
pub mod summarize;
