//! Bagging ensemble of regression trees
//!
//! Each tree is trained on a bootstrap resample of the training pairs drawn
//! from a seeded generator, so the same seed always yields the same forest.
//!
//! ## Extrapolation
//!
//! Tree leaves hold means of training targets. A feature value beyond the
//! training range falls into the outermost leaf of every tree, so the
//! forest predicts one constant for all such values and never follows a
//! trend past the data.

use crate::tree::{validate_samples, RegressionTree};
use predictor_spi::{PredictionError, Regressor, Result};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Random forest regressor over one numeric feature
///
/// @algorithm RandomForest
/// @category MachineLearning
/// @complexity O(t * n log n) fit, O(t * depth) predict
/// @thread_safe true
/// @since 0.1.0
///
/// # Example
///
/// ```rust
/// use predictor_core::RandomForestRegressor;
/// use predictor_spi::Regressor;
///
/// let x: Vec<f64> = (1..=8).map(f64::from).collect();
/// let y = vec![3.0, 4.0, 6.0, 7.0, 9.0, 10.0, 12.0, 13.0];
///
/// let mut forest = RandomForestRegressor::new(25, 7);
/// forest.fit(&x, &y).unwrap();
/// let next = forest.predict(&[9.0, 10.0]).unwrap();
/// assert_eq!(next[0], next[1]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestRegressor {
    n_estimators: usize,
    seed: u64,
    max_depth: Option<usize>,
    min_samples_split: usize,
    trees: Vec<RegressionTree>,
}

impl RandomForestRegressor {
    pub fn new(n_estimators: usize, seed: u64) -> Self {
        Self {
            n_estimators,
            seed,
            max_depth: None,
            min_samples_split: 2,
            trees: Vec::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split;
        self
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}

impl Regressor for RandomForestRegressor {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(PredictionError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        validate_samples(x, y)?;

        let n = x.len();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.n_estimators);
        let mut bx = vec![0.0; n];
        let mut by = vec![0.0; n];

        for _ in 0..self.n_estimators {
            for i in 0..n {
                let idx = rng.gen_range(0..n);
                bx[i] = x[idx];
                by[i] = y[idx];
            }
            let mut tree = RegressionTree::new(self.max_depth, self.min_samples_split);
            tree.fit(&bx, &by)?;
            trees.push(tree);
        }

        self.trees = trees;
        Ok(())
    }

    fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        if self.trees.is_empty() {
            return Err(PredictionError::NotFitted);
        }

        let mut totals = vec![0.0; x.len()];
        for tree in &self.trees {
            for (total, value) in totals.iter_mut().zip(tree.predict(x)?) {
                *total += value;
            }
        }

        let count = self.trees.len() as f64;
        Ok(totals.into_iter().map(|t| t / count).collect())
    }

    fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}
