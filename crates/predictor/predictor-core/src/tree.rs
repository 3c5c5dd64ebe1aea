//! Single-feature CART regression tree
//!
//! Splits are chosen to minimise the summed squared error of the two
//! children. Each leaf predicts the mean target of its samples.

use predictor_spi::{PredictionError, Regressor, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, x: f64) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Split {
                    threshold,
                    left,
                    right,
                } => {
                    node = if x <= *threshold { left } else { right };
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }
}

/// Regression tree over one numeric feature
///
/// @algorithm CART
/// @category MachineLearning
/// @complexity O(n log n) fit, O(depth) predict
/// @thread_safe true
/// @since 0.1.0
///
/// # Example
///
/// ```rust
/// use predictor_core::RegressionTree;
/// use predictor_spi::Regressor;
///
/// let mut tree = RegressionTree::new(None, 2);
/// tree.fit(&[1.0, 2.0, 3.0, 4.0], &[5.0, 5.0, 9.0, 9.0]).unwrap();
/// assert_eq!(tree.predict(&[1.5, 3.5]).unwrap(), vec![5.0, 9.0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    max_depth: Option<usize>,
    min_samples_split: usize,
    root: Option<Node>,
}

impl RegressionTree {
    /// Create an unfitted tree.
    ///
    /// `min_samples_split` is raised to 2 if smaller.
    pub fn new(max_depth: Option<usize>, min_samples_split: usize) -> Self {
        Self {
            max_depth,
            min_samples_split: min_samples_split.max(2),
            root: None,
        }
    }

    /// Depth of the fitted tree, 0 for a single leaf or an unfitted tree.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, Node::n_leaves)
    }

    /// Prediction for a single feature value.
    pub fn predict_one(&self, x: f64) -> Result<f64> {
        self.root
            .as_ref()
            .map(|root| root.predict(x))
            .ok_or(PredictionError::NotFitted)
    }

    fn build(&self, samples: &[(f64, f64)], depth: usize) -> Node {
        let n = samples.len();
        let mean = samples.iter().map(|s| s.1).sum::<f64>() / n as f64;

        let depth_reached = self.max_depth.is_some_and(|max| depth >= max);
        if n < self.min_samples_split || depth_reached {
            return Node::Leaf { value: mean };
        }

        match best_split(samples) {
            Some(at) => {
                let threshold = (samples[at - 1].0 + samples[at].0) / 2.0;
                Node::Split {
                    threshold,
                    left: Box::new(self.build(&samples[..at], depth + 1)),
                    right: Box::new(self.build(&samples[at..], depth + 1)),
                }
            }
            None => Node::Leaf { value: mean },
        }
    }
}

/// Index splitting `samples` (sorted by feature) into `[..at]` and `[at..]`
/// with the smallest total squared error, or `None` when no split improves
/// on the parent.
fn best_split(samples: &[(f64, f64)]) -> Option<usize> {
    let n = samples.len();
    let total: f64 = samples.iter().map(|s| s.1).sum();
    let total_sq: f64 = samples.iter().map(|s| s.1 * s.1).sum();
    let parent_sse = total_sq - total * total / n as f64;
    if parent_sse <= 1e-12 * total_sq.max(1.0) {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    let mut left_sum = 0.0;
    let mut left_sq = 0.0;

    for at in 1..n {
        let y = samples[at - 1].1;
        left_sum += y;
        left_sq += y * y;

        // Equal feature values cannot be separated
        if samples[at - 1].0 >= samples[at].0 {
            continue;
        }

        let n_left = at as f64;
        let n_right = (n - at) as f64;
        let right_sum = total - left_sum;
        let right_sq = total_sq - left_sq;
        let sse = (left_sq - left_sum * left_sum / n_left)
            + (right_sq - right_sum * right_sum / n_right);

        if best.map_or(true, |(_, b)| sse < b) {
            best = Some((at, sse));
        }
    }

    best.filter(|&(_, sse)| sse < parent_sse).map(|(at, _)| at)
}

/// Check paired samples are non-empty, equally long and finite.
pub(crate) fn validate_samples(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(PredictionError::InvalidData(format!(
            "feature and target lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(PredictionError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(PredictionError::InvalidData(
            "samples must be finite".to_string(),
        ));
    }
    Ok(())
}

impl Regressor for RegressionTree {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        validate_samples(x, y)?;

        let mut samples: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        samples.sort_by(|a, b| a.0.total_cmp(&b.0));

        self.root = Some(self.build(&samples, 0));
        Ok(())
    }

    fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let root = self.root.as_ref().ok_or(PredictionError::NotFitted)?;
        Ok(x.iter().map(|&v| root.predict(v)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.root.is_some()
    }
}
