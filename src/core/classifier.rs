// File: src/core/classifier.rs
use crate::config::ClassifierConfig;
use crate::core::types::{ClassId, SparseVector};

/// Multinomial logistic regression over sparse feature vectors.
///
/// Each class owns one weight row of length `n_features + 1`; the last slot is
/// the unpenalized bias. Training minimizes mean cross-entropy plus an L2 term
/// of `1 / (2 * C * n)` with full-batch gradient descent from zero weights.
/// The objective is convex and the updates are applied in a fixed order, so
/// the same inputs always produce the same weights.
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    n_features: usize,
    weights: Vec<Vec<f64>>,
    iterations: usize,
}

impl SoftmaxClassifier {
    pub fn fit(
        samples: &[SparseVector],
        targets: &[ClassId],
        n_classes: usize,
        n_features: usize,
        config: &ClassifierConfig,
    ) -> Self {
        debug_assert_eq!(samples.len(), targets.len());
        let n = samples.len().max(1) as f64;
        let lambda = 1.0 / (config.c * n);
        let bias = n_features;

        // Softmax curvature is bounded by 1/2 in logit space; the bias adds 1
        // to every sample's squared norm.
        let max_sq_norm = samples
            .iter()
            .map(|x| x.iter().map(|(_, w)| w * w).sum::<f64>() + 1.0)
            .fold(1.0_f64, f64::max);
        let step = 1.0 / (0.5 * max_sq_norm + lambda);

        let mut model = Self {
            n_features,
            weights: vec![vec![0.0; n_features + 1]; n_classes],
            iterations: 0,
        };
        let mut grad = vec![vec![0.0; n_features + 1]; n_classes];

        for _ in 0..config.max_iter {
            for row in grad.iter_mut() {
                row.iter_mut().for_each(|g| *g = 0.0);
            }

            for (x, &y) in samples.iter().zip(targets) {
                let probs = model.probabilities(x);
                for (k, p) in probs.into_iter().enumerate() {
                    let diff = (p - if k == y { 1.0 } else { 0.0 }) / n;
                    for &(j, v) in x {
                        grad[k][j] += diff * v;
                    }
                    grad[k][bias] += diff;
                }
            }

            let mut max_grad = 0.0_f64;
            for (w_row, g_row) in model.weights.iter().zip(grad.iter_mut()) {
                for (g, w) in g_row.iter_mut().zip(w_row).take(n_features) {
                    *g += lambda * w;
                }
                max_grad = g_row.iter().fold(max_grad, |m, g| m.max(g.abs()));
            }
            if max_grad < config.tol {
                break;
            }

            for (w_row, g_row) in model.weights.iter_mut().zip(grad.iter()) {
                for (w, g) in w_row.iter_mut().zip(g_row) {
                    *w -= step * g;
                }
            }
            model.iterations += 1;
        }

        model
    }

    /// Linear score of every class for one sample.
    pub fn decision_function(&self, x: &SparseVector) -> Vec<f64> {
        self.weights
            .iter()
            .map(|row| {
                x.iter()
                    .filter(|(j, _)| *j < self.n_features)
                    .map(|&(j, v)| row[j] * v)
                    .sum::<f64>()
                    + row[self.n_features]
            })
            .collect()
    }

    pub fn probabilities(&self, x: &SparseVector) -> Vec<f64> {
        softmax(&self.decision_function(x))
    }

    /// Highest-scoring class. Ties resolve to the lowest `ClassId`.
    pub fn predict(&self, x: &SparseVector) -> ClassId {
        let scores = self.decision_function(x);
        let mut best = 0;
        for (k, &s) in scores.iter().enumerate().skip(1) {
            if s > scores[best] {
                best = k;
            }
        }
        best
    }

    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Gradient steps taken before convergence or `max_iter`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
