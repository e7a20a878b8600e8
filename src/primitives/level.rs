//! Exact-value keys for category labels.
//!
//! ## Purpose
//!
//! Category labels arrive as floating-point values inside the predictor
//! matrix. This module turns a label into an ordered, hashable key so levels
//! can be grouped and looked up by exact value.
//!
//! ## Invariants
//!
//! * Two finite labels map to the same key iff they compare equal
//!   (`-0.0` and `0.0` share a key).
//! * Labels are validated as finite before a key is built.

// External dependencies
use num_traits::Float;

/// Ordered key identifying one category level by its exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelKey {
    mantissa: u64,
    exponent: i16,
    sign: i8,
}

impl LevelKey {
    /// Build the key for a finite label.
    #[inline]
    pub fn new<T: Float>(label: T) -> Self {
        // Adding zero folds -0.0 into 0.0.
        let (mantissa, exponent, sign) = (label + T::zero()).integer_decode();
        Self {
            mantissa,
            exponent,
            sign,
        }
    }
}
