use std::path::Path;

use anyhow::{anyhow, Context};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::encoder::{FeatureVector, FEATURE_COLUMNS};
use crate::error::EncodeError;

type Forest = RandomForestRegressor<f32, f32, DenseMatrix<f32>, Vec<f32>>;

/// Trained rental-price regressor. Loaded once, immutable for the process
/// lifetime; the only call pattern is one fixed-length vector in, one rent
/// figure out.
pub struct RentModel {
    forest: Forest,
}

impl RentModel {
    /// Fit a random forest on an encoded feature matrix. Every row must
    /// already be in `FEATURE_COLUMNS` order.
    pub fn train(xs: &[Vec<f32>], ys: &[f32]) -> anyhow::Result<Self> {
        anyhow::ensure!(!xs.is_empty(), "training set is empty");
        for row in xs {
            anyhow::ensure!(
                row.len() == FEATURE_COLUMNS.len(),
                "training row has {} columns, expected {}",
                row.len(),
                FEATURE_COLUMNS.len()
            );
        }
        let rows: Vec<&[f32]> = xs.iter().map(|v| v.as_slice()).collect();
        let x = DenseMatrix::from_2d_array(&rows);
        let y = ys.to_vec();
        let parameters = RandomForestRegressorParameters {
            max_depth: None,
            min_samples_leaf: 1,
            min_samples_split: 2,
            n_trees: 100,
            m: None,
            keep_samples: false,
            seed: 42,
        };
        let forest = RandomForestRegressor::fit(&x, &y, parameters)
            .map_err(|e| anyhow!("random forest training failed: {e}"))?;
        Ok(Self { forest })
    }

    /// Predict the monthly rent for one encoded observation.
    pub fn predict(&self, vector: &FeatureVector) -> anyhow::Result<f32> {
        self.predict_raw(vector.as_slice())
    }

    /// Predict from a raw slice. The length is checked against
    /// `FEATURE_COLUMNS` before the forest sees anything; a mismatched
    /// vector would still "predict" a number, just a meaningless one.
    pub fn predict_raw(&self, features: &[f32]) -> anyhow::Result<f32> {
        if features.len() != FEATURE_COLUMNS.len() {
            return Err(EncodeError::FeatureOrderMismatch {
                expected: FEATURE_COLUMNS.len(),
                got: features.len(),
            }
            .into());
        }
        let x = DenseMatrix::from_2d_array(&[features]);
        let predictions = self
            .forest
            .predict(&x)
            .map_err(|e| anyhow!("forest prediction failed: {e}"))?;
        Ok(predictions[0])
    }

    /// Predict a whole encoded matrix, used for test-split evaluation.
    pub fn predict_batch(&self, xs: &[Vec<f32>]) -> anyhow::Result<Vec<f32>> {
        for row in xs {
            if row.len() != FEATURE_COLUMNS.len() {
                return Err(EncodeError::FeatureOrderMismatch {
                    expected: FEATURE_COLUMNS.len(),
                    got: row.len(),
                }
                .into());
            }
        }
        let rows: Vec<&[f32]> = xs.iter().map(|v| v.as_slice()).collect();
        let x = DenseMatrix::from_2d_array(&rows);
        self.forest
            .predict(&x)
            .map_err(|e| anyhow!("forest prediction failed: {e}"))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let bytes = bincode::serialize(&self.forest)?;
        std::fs::write(path.as_ref(), bytes)
            .with_context(|| format!("writing model to {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path.as_ref())
            .with_context(|| format!("reading model from {}", path.as_ref().display()))?;
        let forest: Forest = bincode::deserialize(&bytes)?;
        Ok(Self { forest })
    }
}
