//! Bernoulli naive Bayes over presence vectors
//!
//! Per-feature presence probabilities use Laplace smoothing, and scoring is
//! done in log space so long vectors do not underflow.

use tracing::debug;

use super::traits::Classifier;
use crate::error::{Result, SpamError};
use crate::features::{FeatureVector, Label};

/// Bernoulli naive Bayes classifier
#[derive(Debug, Clone, Default)]
pub struct BernoulliNaiveBayes {
    spam_features: Vec<u32>,
    ham_features: Vec<u32>,
    spam_count: u32,
    ham_count: u32,
}

impl BernoulliNaiveBayes {
    /// Create an untrained classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Log-odds that a vector is spam; 0.0 until both classes have been seen
    pub fn score(&self, x: &FeatureVector) -> f64 {
        if self.spam_count == 0 || self.ham_count == 0 {
            return 0.0; // Not enough training data
        }

        let spam_total = self.spam_count as f64;
        let ham_total = self.ham_count as f64;
        let all = spam_total + ham_total;

        let mut log_odds = (spam_total / all).ln() - (ham_total / all).ln();

        for i in 0..self.n_features() {
            // Apply Laplace smoothing
            let p_spam = (self.spam_features[i] as f64 + 1.0) / (spam_total + 2.0);
            let p_ham = (self.ham_features[i] as f64 + 1.0) / (ham_total + 2.0);

            if x.get(i) == 1 {
                log_odds += p_spam.ln() - p_ham.ln();
            } else {
                log_odds += (1.0 - p_spam).ln() - (1.0 - p_ham).ln();
            }
        }

        log_odds
    }

    /// Number of features seen during training
    pub fn n_features(&self) -> usize {
        self.spam_features.len()
    }

    /// Get training counts
    pub fn training_counts(&self) -> (u32, u32) {
        (self.spam_count, self.ham_count)
    }
}

impl Classifier for BernoulliNaiveBayes {
    fn fit(&mut self, x: &[FeatureVector], y: &[Label]) -> Result<()> {
        if x.len() != y.len() {
            return Err(SpamError::Classifier(format!(
                "{} feature vectors but {} labels",
                x.len(),
                y.len()
            )));
        }

        let n_features = x.first().map(FeatureVector::len).unwrap_or(0);
        if let Some(row) = x.iter().position(|v| v.len() != n_features) {
            return Err(SpamError::Classifier(format!(
                "row {} has {} features, expected {}",
                row,
                x[row].len(),
                n_features
            )));
        }

        *self = Self {
            spam_features: vec![0; n_features],
            ham_features: vec![0; n_features],
            spam_count: 0,
            ham_count: 0,
        };

        for (vector, label) in x.iter().zip(y) {
            let (counts, total) = match label {
                Label::Spam => (&mut self.spam_features, &mut self.spam_count),
                Label::Ham => (&mut self.ham_features, &mut self.ham_count),
            };
            *total += 1;
            for i in vector.active() {
                counts[i] += 1;
            }
        }

        debug!(
            spam = self.spam_count,
            ham = self.ham_count,
            features = n_features,
            "Trained naive Bayes classifier"
        );

        Ok(())
    }

    fn predict(&self, x: &[FeatureVector]) -> Vec<Label> {
        x.iter()
            .map(|v| {
                if self.score(v) > 0.0 {
                    Label::Spam
                } else {
                    Label::Ham
                }
            })
            .collect()
    }
}
