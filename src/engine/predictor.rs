//! Prediction from a fitted cluster map.
//!
//! ## Purpose
//!
//! This module answers predictions on new data: each row's category label is
//! looked up in the cluster map, mapped to its cluster mean (or cluster id),
//! and, for fitted values, shifted by the covariate contribution.
//!
//! ## Design notes
//!
//! * **Explicit lookup**: Labels are resolved through a `LevelKey -> row` map
//!   rather than a sort-merge join, so results come out in input row order
//!   with no reordering step.
//! * **Unseen levels**: Fitted values fall back to the unconditional training
//!   mean; cluster ids fall back to [`UNASSIGNED_CLUSTER`]. Neither is an error.
//! * **Pure**: Prediction borrows the model immutably; concurrent calls need
//!   no synchronization.
//!
//! ## Invariants
//!
//! * `result[i]` depends only on row `i` of the input.
//! * Output length equals the number of input rows.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// Internal dependencies
use crate::engine::output::{CatClustModel, LevelRow, UNASSIGNED_CLUSTER};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::design::DesignView;
use crate::primitives::errors::CatClustError;
use crate::primitives::level::LevelKey;

/// What a prediction call returns.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictKind {
    /// Cluster mean plus covariate contribution.
    #[default]
    FittedValues,

    /// Cluster id of each row's level.
    ClusterIds,
}

/// Result of [`CatClustModel::predict_with`].
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction<T> {
    /// Fitted values, one per row.
    Fitted(Vec<T>),

    /// Cluster ids, one per row; [`UNASSIGNED_CLUSTER`] for unseen levels.
    Clusters(Vec<usize>),
}

/// Key-to-row index over the cluster map.
#[derive(Debug, Clone)]
pub struct ClusterLookup {
    index: BTreeMap<LevelKey, usize>,
}

impl ClusterLookup {
    /// Index `levels` by label.
    pub fn new<T: FloatLinalg>(levels: &[LevelRow<T>]) -> Self {
        let index = levels
            .iter()
            .enumerate()
            .map(|(row, level)| (LevelKey::new(level.value), row))
            .collect();
        Self { index }
    }

    /// Row of the cluster map holding `label`, if it was seen in training.
    #[inline]
    pub fn get<T: FloatLinalg>(&self, label: T) -> Option<usize> {
        self.index.get(&LevelKey::new(label)).copied()
    }
}

impl<T: FloatLinalg> CatClustModel<T> {
    /// Fitted values for new row-major predictors.
    pub fn predict(&self, x: &[T]) -> Result<Vec<T>, CatClustError> {
        let design = self.design(x)?;
        let lookup = ClusterLookup::new(&self.levels);

        let fitted = (0..design.n_rows())
            .map(|i| {
                let base = lookup
                    .get(design.label(i))
                    .map_or(self.unconditional_mean, |row| self.levels[row].cluster_mean);
                match &self.coefficients {
                    Some(beta) => base + design.covariate_dot(i, beta),
                    None => base,
                }
            })
            .collect();
        Ok(fitted)
    }

    /// Cluster ids for new row-major predictors.
    ///
    /// Levels absent from training map to [`UNASSIGNED_CLUSTER`].
    pub fn predict_clusters(&self, x: &[T]) -> Result<Vec<usize>, CatClustError> {
        let design = self.design(x)?;
        let lookup = ClusterLookup::new(&self.levels);

        let ids = (0..design.n_rows())
            .map(|i| {
                lookup
                    .get(design.label(i))
                    .map_or(UNASSIGNED_CLUSTER, |row| self.levels[row].cluster)
            })
            .collect();
        Ok(ids)
    }

    /// Predict either fitted values or cluster ids.
    pub fn predict_with(&self, x: &[T], kind: PredictKind) -> Result<Prediction<T>, CatClustError> {
        match kind {
            PredictKind::FittedValues => self.predict(x).map(Prediction::Fitted),
            PredictKind::ClusterIds => self.predict_clusters(x).map(Prediction::Clusters),
        }
    }

    fn design<'a>(&self, x: &'a [T]) -> Result<DesignView<'a, T>, CatClustError> {
        Validator::validate_predictors(x, self.dimensions)?;
        Ok(DesignView::new(x, self.dimensions, self.category_column))
    }
}
