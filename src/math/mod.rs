//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - The generalized-inverse least-squares solve (nalgebra backend)
//! - Weighted prefix moments for O(1) segment costs
//!
//! These carry no estimator-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend and solver interface.
pub mod linalg;

/// Weighted prefix moments.
pub mod moments;
