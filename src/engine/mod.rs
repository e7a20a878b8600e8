//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting and prediction: input validation, the
//! residualize, summarize, partition and assemble pipeline, the fitted model
//! object, and prediction from its cluster map.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit pipeline and cluster map assembly.
pub mod executor;

/// Fitted model object.
pub mod output;

/// Prediction from a fitted model.
pub mod predictor;

/// Input and parameter validation.
pub mod validator;
